//! Knight move generation
//!
//! Knights jump in an L-shape: two squares along one axis and one along the
//! other. They ignore anything standing in between, so only the landing
//! square matters (and own-color landings are rejected by the caller).

use crate::types::*;

pub(super) fn can_move(piece: &Piece, target: Square) -> Option<MoveCategory> {
    matches!(piece.position.abs_distance(target), (1, 2) | (2, 1)).then_some(MoveCategory::Normal)
}
