//! Move legality

use crate::board::{Board, Pos, Stone};

/// Check if a stone may be placed at `pos`: inside the board and empty.
#[must_use]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    matches!(board.get(pos), Ok(Stone::Empty))
}
