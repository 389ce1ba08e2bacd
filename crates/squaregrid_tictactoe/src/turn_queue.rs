//! Round-robin order of players.

use crate::{EngineError, Player};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Rotating sequence of players. The head is the player to move.
#[derive(Debug)]
pub struct TurnQueue {
    players: VecDeque<Player>,
}

impl TurnQueue {
    /// Creates a queue; the first player moves first.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoPlayers` for an empty list.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<Player>) -> Result<Self, EngineError> {
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        Ok(Self {
            players: players.into(),
        })
    }

    /// The player who must move next.
    pub fn current(&self) -> &Player {
        &self.players[0]
    }

    /// Mutable access to the player who must move next.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[0]
    }

    /// Moves the head to the tail.
    pub fn advance(&mut self) {
        self.players.rotate_left(1);
        debug!(next = %self.current().name(), "Turn advanced");
    }

    /// Number of players in the rotation.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a queue is never built empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in turn order, starting with the current one.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
