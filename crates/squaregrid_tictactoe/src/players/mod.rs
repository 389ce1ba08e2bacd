//! Move sources and the players that own them.

mod console;
mod first_available;
mod scripted;

pub use console::{Console, ConsolePlayer, MoveInputError, ParsedMove, parse_move};
pub use first_available::FirstAvailable;
pub use scripted::ScriptedPlayer;

use crate::{Board, Mark, PlayerError, Position};
use tracing::instrument;

/// Anything that can pick a position on demand.
///
/// Implementations must return a position that is currently valid for
/// `board`. The engine treats anything else as a bug in the source.
pub trait MoveSource {
    /// Gets the next move for the given board.
    fn produce_move(&mut self, board: &Board) -> Result<Position, PlayerError>;
}

/// A named participant holding a mark and a move source.
pub struct Player {
    name: String,
    mark: Mark,
    source: Box<dyn MoveSource>,
}

impl Player {
    /// Creates a new player.
    #[instrument(skip(name, source), fields(player = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark, source: impl MoveSource + 'static) -> Self {
        Self {
            name: name.as_ref().to_string(),
            mark,
            source: Box::new(source),
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Asks the move source for a position.
    #[instrument(skip(self, board), fields(player = %self.name))]
    pub fn produce_move(&mut self, board: &Board) -> Result<Position, PlayerError> {
        self.source.produce_move(board)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("mark", &self.mark)
            .finish_non_exhaustive()
    }
}
