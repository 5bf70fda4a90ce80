//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//!
//! ## Algorithm
//!
//! 1. The destination must lie on one of the piece's lines (orthogonal or
//!    diagonal) from its square
//! 2. Walk from the start toward the destination one step at a time
//! 3. Every square strictly between the two must be empty; the first occupied
//!    square blocks the line
//!
//! The destination itself may be empty or hold an enemy piece; own-color
//! destinations are rejected before the per-piece rules run.

use crate::board::Board;
use crate::types::*;

/// Same file or same rank, and not the same square
pub(super) fn is_orthogonal(from: Square, to: Square) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    (file_delta == 0) != (rank_delta == 0)
}

/// Same diagonal, and not the same square
pub(super) fn is_diagonal(from: Square, to: Square) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    file_delta != 0 && file_delta.abs() == rank_delta.abs()
}

/// Whether every square strictly between `from` and `to` is empty
///
/// `from` and `to` must share a line.
pub(super) fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    let (file_step, rank_step) = (file_delta.signum(), rank_delta.signum());
    let steps = file_delta.abs().max(rank_delta.abs());

    let mut current = from;
    for _ in 1..steps {
        current = match current.offset(file_step, rank_step) {
            Some(next) => next,
            None => return false,
        };
        if !board.is_empty(current) {
            return false;
        }
    }

    true
}
