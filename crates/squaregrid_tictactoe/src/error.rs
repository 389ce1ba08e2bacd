//! Error types for the game engine.

use crate::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// A move was applied to a cell that cannot take it.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", message, file, line)]
pub struct BoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A move source could not produce a move.
#[derive(Debug, Clone, Display, Error)]
#[display("Player error: {} at {}:{}", message, file, line)]
pub struct PlayerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PlayerError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Errors that stop a game.
#[derive(Debug, Clone, Display)]
pub enum EngineError {
    /// A move source returned a position that is not a legal move.
    ///
    /// This is a bug in the move source, not a user mistake.
    #[display("{} returned invalid position {}", player, position)]
    ContractViolation {
        /// Name of the offending player.
        player: String,
        /// Position it returned.
        position: Position,
    },

    /// The engine was built with fewer than two players.
    #[display("A game needs at least 2 players, got {}", _0)]
    TooFewPlayers(usize),

    /// A turn queue was built with no players at all.
    #[display("Turn queue needs at least one player")]
    NoPlayers,

    /// A move source failed.
    #[display("{}", _0)]
    Player(PlayerError),

    /// The board rejected a move or a size.
    #[display("{}", _0)]
    Board(BoardError),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Player(err) => Some(err),
            EngineError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlayerError> for EngineError {
    fn from(err: PlayerError) -> Self {
        EngineError::Player(err)
    }
}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        EngineError::Board(err)
    }
}
