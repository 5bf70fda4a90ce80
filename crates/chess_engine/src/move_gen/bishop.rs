//! Bishop move generation
//!
//! Bishops slide along diagonals until blocked.

use super::sliding;
use crate::board::Board;
use crate::types::*;

pub(super) fn can_move(board: &Board, piece: &Piece, target: Square) -> Option<MoveCategory> {
    (sliding::is_diagonal(piece.position, target)
        && sliding::is_path_clear(board, piece.position, target))
    .then_some(MoveCategory::Normal)
}
