//! Move-log text
//!
//! Short algebraic-style text for committed moves. The text is descriptive
//! only; the engine never parses it back.
//!
//! - `Nf3`, `e4` - piece letter (none for pawns) and destination
//! - `Bxe5`, `exd6` - `x` on captures; pawn captures name the origin file
//! - `O-O`, `O-O-O` - castles
//! - `e8=Q` - promotion suffix, appended once the choice is made
//! - `Qxf7#` - checkmate suffix, appended when the mate is detected

use crate::board::AppliedMove;
use crate::types::*;

pub const CHECKMATE_SUFFIX: char = '#';

/// Short algebraic text of a played move, without number or suffixes
pub fn move_text(applied: &AppliedMove) -> String {
    let mv = &applied.mv;
    match applied.category {
        MoveCategory::ShortCastle => return "O-O".to_string(),
        MoveCategory::LongCastle => return "O-O-O".to_string(),
        MoveCategory::Normal | MoveCategory::EnPassant => {}
    }

    let capture = applied.captured.is_some();
    let mut text = String::new();
    match mv.piece.kind {
        PieceType::Pawn if capture => text.push(mv.from.file_char()),
        PieceType::Pawn => {}
        kind => text.push(kind.letter()),
    }
    if capture {
        text.push('x');
    }
    text.push_str(&mv.to.to_string());
    text
}

/// Numbered log entry: `"3. Nf3"` for White, `"3... Nf6"` for Black
pub fn log_text(full_move: u32, color: Color, applied: &AppliedMove) -> String {
    let dots = match color {
        Color::White => ".",
        Color::Black => "...",
    };
    format!("{full_move}{dots} {}", move_text(applied))
}

pub fn promotion_suffix(kind: PieceType) -> String {
    format!("={}", kind.letter())
}
