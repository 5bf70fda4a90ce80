//! Queen move generation
//!
//! The queen combines rook and bishop lines.

use super::sliding;
use crate::board::Board;
use crate::types::*;

pub(super) fn can_move(board: &Board, piece: &Piece, target: Square) -> Option<MoveCategory> {
    let on_line = sliding::is_orthogonal(piece.position, target)
        || sliding::is_diagonal(piece.position, target);
    (on_line && sliding::is_path_clear(board, piece.position, target))
        .then_some(MoveCategory::Normal)
}
