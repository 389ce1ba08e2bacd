//! Core domain types for N-by-N tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first in the default setup).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Three-character glyph used by the board render.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => " . ",
            Cell::Occupied(Mark::X) => " X ",
            Cell::Occupied(Mark::O) => " O ",
        }
    }
}

/// A (row, col) coordinate.
///
/// Validity depends on the board it is used with; see
/// [`Board::is_valid_move`](crate::Board::is_valid_move).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A mark placed at a position, as recorded in the game history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("{} -> {}", mark, position)]
pub struct Move {
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Returns the mark of this move.
    #[instrument]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    #[instrument]
    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(Cell::Empty.glyph(), " . ");
        assert_eq!(Cell::Occupied(Mark::X).glyph(), " X ");
        assert_eq!(Cell::Occupied(Mark::O).glyph(), " O ");
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Move::new(Mark::O, Position::new(0, 0)).to_string(), "O -> (0, 0)");
        assert_eq!(Mark::X.to_string(), "X");
    }
}
