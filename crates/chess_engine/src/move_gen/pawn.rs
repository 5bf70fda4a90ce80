//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: two squares from the pawn's starting rank, only if the
//!   pawn has never moved and both squares ahead are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonally forward onto the empty square behind an enemy
//!   pawn that double-pushed beside this pawn on the immediately preceding move
//!
//! Promotion is not a move category; the game state machine handles it once a
//! pawn lands on its last rank.

use crate::board::Board;
use crate::types::*;

pub(super) fn can_move(
    board: &Board,
    piece: &Piece,
    target: Square,
    last_move: Option<&Move>,
) -> Option<MoveCategory> {
    let forward = piece.color.forward();
    let (file_delta, rank_delta) = piece.position.delta(target);

    match (file_delta.abs(), rank_delta) {
        (0, r) if r == forward => board.is_empty(target).then_some(MoveCategory::Normal),
        (0, r) if r == 2 * forward => {
            let intermediate = piece.position.offset(0, forward)?;
            let can_double = !piece.has_moved()
                && piece.position.rank == board.pawn_start_rank(piece.color)
                && board.is_empty(intermediate)
                && board.is_empty(target);
            can_double.then_some(MoveCategory::Normal)
        }
        (1, r) if r == forward => {
            // Own-color targets are already filtered out by the caller
            if board.get(target).is_some() {
                Some(MoveCategory::Normal)
            } else {
                en_passant(board, piece, target, last_move)
            }
        }
        _ => None,
    }
}

/// Diagonal step onto the empty square an enemy pawn just skipped over
fn en_passant(
    board: &Board,
    piece: &Piece,
    target: Square,
    last_move: Option<&Move>,
) -> Option<MoveCategory> {
    let last = last_move?;
    let double_pushed = last.piece.kind == PieceType::Pawn
        && last.piece.color != piece.color
        && last.from.abs_distance(last.to) == (0, 2);
    if !double_pushed {
        return None;
    }

    // The enemy pawn must now stand beside us on the target's file, and the
    // target must be the square it passed over
    let beside = last.to == Square::new(target.file, piece.position.rank);
    let skipped = (last.from.rank as u16 + last.to.rank as u16) / 2 == target.rank as u16;
    let still_there = matches!(
        board.get(last.to),
        Some(p) if p.kind == PieceType::Pawn && p.color != piece.color
    );

    (beside && skipped && still_there).then_some(MoveCategory::EnPassant)
}
