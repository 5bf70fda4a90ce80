//! Rule constants
//!
//! Material values follow the usual 1/3/3/5/9 pawn-unit scale. The king has
//! no material value because it is never captured.

/// Side length of a standard board
pub const STANDARD_BOARD_SIZE: u8 = 8;

/// Largest board whose files can still be written as single letters
pub const MAX_BOARD_SIZE: u8 = 26;

pub const PAWN_VALUE: u32 = 1;
pub const KNIGHT_VALUE: u32 = 3;
pub const BISHOP_VALUE: u32 = 3;
pub const ROOK_VALUE: u32 = 5;
pub const QUEEN_VALUE: u32 = 9;
pub const KING_VALUE: u32 = 0;

/// Plies without a pawn move or capture before the fifty-move draw
pub const FIFTY_MOVE_COUNTDOWN: u32 = 50;

/// Occurrences of one position that make a repetition draw
pub const REPETITION_LIMIT: usize = 3;

/// Each side must hold strictly less material than this (and no pawn) for
/// an insufficient-material draw. Equal to a rook, so a lone minor piece
/// qualifies and a lone rook does not.
pub const MATERIAL_DRAW_THRESHOLD: u32 = ROOK_VALUE;

/// Back-rank piece order of the default layout, files a..h
pub const BACK_RANK: [crate::types::PieceType; 8] = {
    use crate::types::PieceType::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};
