//! Game rules for N-by-N tic-tac-toe.
//!
//! Rules are pure functions of the board and the mark that just moved.
//! They are kept apart from board storage so the engine can be handed any
//! [`RuleEngine`] implementation.

mod win;

pub use win::{Line, winning_line};

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Nobody has won and cells remain.
    Continue,
    /// The given mark completed a line.
    Win(Mark),
    /// The board is full with no completed line.
    Draw,
}

impl Verdict {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Continue)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Verdict::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Win/draw evaluation strategy.
pub trait RuleEngine {
    /// Evaluates the board right after `just_moved` placed a mark.
    fn evaluate(&self, board: &Board, just_moved: Mark) -> Verdict;

    /// Whether `pos` is a legal move on `board`.
    fn is_valid_move(&self, board: &Board, pos: Position) -> bool {
        board.is_valid_move(pos)
    }
}

/// Classic rules: a full row, column, or diagonal of one mark wins; a full
/// board otherwise draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RuleEngine for StandardRules {
    #[instrument(skip(self, board), fields(size = board.size()))]
    fn evaluate(&self, board: &Board, just_moved: Mark) -> Verdict {
        if let Some(line) = winning_line(board, just_moved) {
            debug!(%line, mark = %just_moved, "Line completed");
            return Verdict::Win(just_moved);
        }
        if board.is_full() {
            Verdict::Draw
        } else {
            Verdict::Continue
        }
    }
}
