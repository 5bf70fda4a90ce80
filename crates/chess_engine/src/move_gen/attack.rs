//! Attack detection
//!
//! A square is attacked when an enemy piece could capture on it. This differs
//! from reachability in two places: pawns attack only diagonally (a forward
//! push never attacks), and kings attack only adjacent squares (castling never
//! attacks). Castling uses this to test the king's start, transit and landing
//! squares, which are mostly empty and so cannot be tested with capture-style
//! reachability.

use super::{knight, sliding};
use crate::board::Board;
use crate::types::*;

/// Whether any piece of `by_color` attacks `square`
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|piece| attacks(board, piece, square))
}

/// Whether `piece` attacks `target`, regardless of what stands on it
pub fn attacks(board: &Board, piece: &Piece, target: Square) -> bool {
    if piece.position == target {
        return false;
    }
    let from = piece.position;
    match piece.kind {
        PieceType::Pawn => {
            let (file_delta, rank_delta) = from.delta(target);
            file_delta.abs() == 1 && rank_delta == piece.color.forward()
        }
        PieceType::King => {
            let (file_dist, rank_dist) = from.abs_distance(target);
            file_dist <= 1 && rank_dist <= 1
        }
        PieceType::Knight => knight::can_move(piece, target).is_some(),
        PieceType::Rook => {
            sliding::is_orthogonal(from, target) && sliding::is_path_clear(board, from, target)
        }
        PieceType::Bishop => {
            sliding::is_diagonal(from, target) && sliding::is_path_clear(board, from, target)
        }
        PieceType::Queen => {
            (sliding::is_orthogonal(from, target) || sliding::is_diagonal(from, target))
                && sliding::is_path_clear(board, from, target)
        }
    }
}
