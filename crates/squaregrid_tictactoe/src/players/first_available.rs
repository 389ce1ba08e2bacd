//! Player that takes the first empty cell.

use super::MoveSource;
use crate::{Board, PlayerError, Position};
use tracing::{debug, instrument};

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveSource for FirstAvailable {
    #[instrument(skip(self, board), fields(size = board.size()))]
    fn produce_move(&mut self, board: &Board) -> Result<Position, PlayerError> {
        let position = board
            .empty_positions()
            .next()
            .ok_or_else(|| PlayerError::new("No valid moves available"))?;
        debug!(%position, "First available cell chosen");
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_skips_occupied_cells() {
        let mut board = Board::new(2).unwrap();
        board.apply_move(Position::new(0, 0), Mark::X).unwrap();
        board.apply_move(Position::new(0, 1), Mark::O).unwrap();
        assert_eq!(FirstAvailable.produce_move(&board).unwrap(), Position::new(1, 0));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new(1).unwrap();
        board.apply_move(Position::new(0, 0), Mark::X).unwrap();
        assert!(FirstAvailable.produce_move(&board).is_err());
    }
}
