//! Move rule generator
//!
//! Answers "can this piece reach square X, and as what kind of move?" for
//! each of the six piece types. Everything here is a pure function of the
//! board plus the immediately preceding move (needed only for en passant);
//! nothing is mutated and king safety is not considered. See
//! [`crate::legality`] for the step that turns reachability into legality.
//!
//! ## Shared rules
//!
//! - A piece never moves onto a square held by its own color
//! - A piece never "moves" to its own square or off the board
//! - Sliding pieces stop at the first occupied square in a direction
//!
//! ## Module Structure
//!
//! - `pawn` - pushes, double step, captures, en passant
//! - `knight` - L-shaped jumps
//! - `sliding` - line geometry and path clearance shared by `rook`, `bishop`, `queen`
//! - `king` - single steps and castling
//! - `attack` - square-attack tests used for castling transit squares

pub mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

#[cfg(test)]
mod tests;

pub use attack::is_square_attacked;

use crate::board::Board;
use crate::types::*;

/// Whether `piece` can reach `target`, and as which category of move
///
/// `piece.position` is taken as the piece's square. `last_move` is the move
/// committed on the previous ply, if any.
pub fn can_move(
    board: &Board,
    piece: &Piece,
    target: Square,
    last_move: Option<&Move>,
) -> Option<MoveCategory> {
    if !board.contains(target) || target == piece.position {
        return None;
    }

    // Can't capture your own pieces
    if let Some(occupant) = board.get(target) {
        if occupant.color == piece.color {
            return None;
        }
    }

    match piece.kind {
        PieceType::Pawn => pawn::can_move(board, piece, target, last_move),
        PieceType::Knight => knight::can_move(piece, target),
        PieceType::Bishop => bishop::can_move(board, piece, target),
        PieceType::Rook => rook::can_move(board, piece, target),
        PieceType::Queen => queen::can_move(board, piece, target),
        PieceType::King => king::can_move(board, piece, target),
    }
}

/// Every square `piece` can reach, with the move category, ignoring king safety
pub fn reachable(
    board: &Board,
    piece: &Piece,
    last_move: Option<&Move>,
) -> Vec<(Square, MoveCategory)> {
    board
        .squares()
        .filter_map(|square| can_move(board, piece, square, last_move).map(|cat| (square, cat)))
        .collect()
}

/// Squares the piece "sees": normal and en passant destinations, no castles
///
/// Meant for move hints in a presentation layer.
pub fn vision(board: &Board, piece: &Piece, last_move: Option<&Move>) -> Vec<Square> {
    reachable(board, piece, last_move)
        .into_iter()
        .filter(|(_, cat)| matches!(cat, MoveCategory::Normal | MoveCategory::EnPassant))
        .map(|(square, _)| square)
        .collect()
}
