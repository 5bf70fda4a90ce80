//! King move generation
//!
//! ## King Movement Rules
//!
//! - One square in any direction
//! - Castling: two squares along the home rank toward a rook, when
//!   - neither the king nor that rook has ever moved
//!   - every square between king and rook is empty
//!   - the king's start, transit and destination squares are not attacked
//!
//! Whether the king may step into check is decided by the legality checker,
//! not here.

use super::attack;
use crate::board::Board;
use crate::types::*;

pub(super) fn can_move(board: &Board, piece: &Piece, target: Square) -> Option<MoveCategory> {
    let (file_dist, rank_dist) = piece.position.abs_distance(target);
    if file_dist <= 1 && rank_dist <= 1 {
        return Some(MoveCategory::Normal);
    }
    castle(board, piece, target)
}

fn castle(board: &Board, king: &Piece, target: Square) -> Option<MoveCategory> {
    if king.has_moved() {
        return None;
    }
    let (rook_from, _, category) = board.castle_rook_squares(king.position, target)?;
    let rook = board.get(rook_from)?;
    if rook.kind != PieceType::Rook || rook.color != king.color || rook.has_moved() {
        return None;
    }

    let dir = king.position.delta(target).0.signum();
    let mut between = king.position.offset(dir, 0)?;
    while between != rook_from {
        if !board.is_empty(between) {
            return None;
        }
        between = between.offset(dir, 0)?;
    }

    let transit = king.position.offset(dir, 0)?;
    let enemy = king.color.opposite();
    let safe = [king.position, transit, target]
        .into_iter()
        .all(|square| !attack::is_square_attacked(board, square, enemy));

    safe.then_some(category)
}
