//! The N-by-N grid.

use crate::{BoardError, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square board of side `size`, stored row-major.
///
/// The grid never resizes after construction and every cell is always
/// [`Cell::Empty`] or [`Cell::Occupied`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if `size` is zero or `size * size` overflows.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::new("Board size must be at least 1"));
        }
        let cells = size
            .checked_mul(size)
            .ok_or_else(|| BoardError::new(format!("Board size {} is too large", size)))?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; cells],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Returns the cell at (`row`, `col`), treating off-board cells as empty.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.get(Position::new(row, col)).unwrap_or(Cell::Empty)
    }

    /// True iff `pos` is on the board and its cell is empty.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Places `mark` at `pos`.
    ///
    /// Callers must check [`is_valid_move`](Self::is_valid_move) first.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if `pos` is off the board or occupied; the board
    /// is left unchanged.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        let idx = self
            .index(pos)
            .ok_or_else(|| BoardError::new(format!("Position {} is off the board", pos)))?;
        if self.cells[idx] != Cell::Empty {
            return Err(BoardError::new(format!("Position {} is already occupied", pos)));
        }
        self.cells[idx] = Cell::Occupied(mark);
        debug!(%pos, %mark, "Mark placed");
        Ok(())
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Cells are joined by `|`; rows are separated by `---` segments
    /// joined by `+`. No trailing newline.
    pub fn render(&self) -> String {
        let separator = vec!["---"; self.size].join("+");
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.glyph()).collect::<Vec<_>>().join("|"))
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
