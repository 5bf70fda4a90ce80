//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked by another piece or the
//! board edge.

use super::sliding;
use crate::board::Board;
use crate::types::*;

pub(super) fn can_move(board: &Board, piece: &Piece, target: Square) -> Option<MoveCategory> {
    (sliding::is_orthogonal(piece.position, target)
        && sliding::is_path_clear(board, piece.position, target))
    .then_some(MoveCategory::Normal)
}
