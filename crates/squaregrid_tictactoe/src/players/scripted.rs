//! Player that replays a fixed list of moves.

use super::MoveSource;
use crate::{Board, PlayerError, Position};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Plays the given positions in order, one per turn.
///
/// The script is trusted: positions are returned as-is, so an illegal
/// script surfaces as an engine contract violation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    /// Creates a scripted player from (row, col) pairs.
    pub fn new(moves: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            moves: moves.into_iter().map(Position::from).collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedPlayer {
    #[instrument(skip(self, _board), fields(remaining = self.remaining()))]
    fn produce_move(&mut self, _board: &Board) -> Result<Position, PlayerError> {
        let position = self
            .moves
            .pop_front()
            .ok_or_else(|| PlayerError::new("Script has no moves left"))?;
        debug!(%position, remaining = self.remaining(), "Scripted move");
        Ok(position)
    }
}
