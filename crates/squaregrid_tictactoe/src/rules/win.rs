//! Win detection for N-by-N boards.

use crate::{Board, Cell, Mark};
use derive_more::Display;
use tracing::instrument;

/// A line that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Line {
    /// Row with the given index.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index.
    #[display("column {}", _0)]
    Column(usize),
    /// Cells (i, i).
    #[display("diagonal")]
    Diagonal,
    /// Cells (i, N-1-i).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Returns the first line completely filled with `mark`.
///
/// Rows are checked first, then columns, then the diagonal, then the
/// anti-diagonal. Only `mark` is considered.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    let n = board.size();
    let owned = |row: usize, col: usize| board.cell(row, col) == Cell::Occupied(mark);

    if let Some(row) = (0..n).find(|&row| (0..n).all(|col| owned(row, col))) {
        return Some(Line::Row(row));
    }
    if let Some(col) = (0..n).find(|&col| (0..n).all(|row| owned(row, col))) {
        return Some(Line::Column(col));
    }
    if (0..n).all(|i| owned(i, i)) {
        return Some(Line::Diagonal);
    }
    if (0..n).all(|i| owned(i, n - 1 - i)) {
        return Some(Line::AntiDiagonal);
    }
    None
}
