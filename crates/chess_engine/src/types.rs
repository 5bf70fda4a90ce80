//! Core data types
//!
//! Squares are plain `(file, rank)` identifiers, 1-based on both axes.
//! Pieces are values owned by the board's slots; moves carry copies of the
//! pieces involved so that a stale move (one whose pieces no longer match the
//! board) can be detected and rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};

/// Side of a piece or player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in
    pub fn forward(self) -> i16 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// The six piece kinds
///
/// Rule dispatch is a `match` on this enum in [`crate::move_gen::can_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Material value in pawn units
    pub fn value(self) -> u32 {
        match self {
            PieceType::Pawn => PAWN_VALUE,
            PieceType::Knight => KNIGHT_VALUE,
            PieceType::Bishop => BISHOP_VALUE,
            PieceType::Rook => ROOK_VALUE,
            PieceType::Queen => QUEEN_VALUE,
            PieceType::King => KING_VALUE,
        }
    }

    /// Upper-case notation letter
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

/// Board coordinate, `file` and `rank` both in `1..=N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Square shifted by a signed `(file, rank)` offset, if it stays positive
    pub fn offset(self, file_delta: i16, rank_delta: i16) -> Option<Square> {
        let file = self.file as i16 + file_delta;
        let rank = self.rank as i16 + rank_delta;
        if file < 1 || rank < 1 || file > u8::MAX as i16 || rank > u8::MAX as i16 {
            return None;
        }
        Some(Square::new(file as u8, rank as u8))
    }

    /// Signed `(file, rank)` distance from `self` to `other`
    pub fn delta(self, other: Square) -> (i16, i16) {
        (
            other.file as i16 - self.file as i16,
            other.rank as i16 - self.rank as i16,
        )
    }

    /// Absolute `(file, rank)` distance between two squares
    pub fn abs_distance(self, other: Square) -> (u8, u8) {
        (self.file.abs_diff(other.file), self.rank.abs_diff(other.rank))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file.saturating_sub(1)) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquare { text: s.to_string() };
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return Err(invalid());
        }
        let rank: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if rank == 0 || rank > MAX_BOARD_SIZE {
            return Err(invalid());
        }
        Ok(Square::new(file as u8 - b'a' + 1, rank))
    }
}

/// A piece owned by a board slot
///
/// `position` mirrors the slot the piece is stored under and is kept in sync
/// by the board; `move_count` drives first-move rules (pawn double step,
/// castling rights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    pub position: Square,
    pub move_count: u32,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color, position: Square) -> Self {
        Self {
            kind,
            color,
            position,
            move_count: 0,
        }
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Notation letter, upper-case for White and lower-case for Black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// How a move is carried out on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Normal,
    EnPassant,
    ShortCastle,
    LongCastle,
}

impl MoveCategory {
    pub fn is_castle(self) -> bool {
        matches!(self, MoveCategory::ShortCastle | MoveCategory::LongCastle)
    }
}

/// Start and end square of a move, as produced by an input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveIntent {
    pub from: Square,
    pub to: Square,
}

impl MoveIntent {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// A fully resolved move
///
/// `piece` and `captured` are the board contents of `from` and `to` when the
/// move was built. For en passant `captured` is `None` because the landing
/// square is empty; the captured pawn is found when the move is applied.
/// `category` is filled in by the legality checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub category: Option<MoveCategory>,
    pub promoted: bool,
}

impl Move {
    /// Resolve an intent against the board
    pub fn resolve(board: &Board, intent: MoveIntent) -> ChessEngineResult<Move> {
        board.check_bounds(intent.from)?;
        board.check_bounds(intent.to)?;
        let piece = board
            .get(intent.from)
            .copied()
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: intent.from.to_string(),
            })?;
        Ok(Move {
            from: intent.from,
            to: intent.to,
            piece,
            captured: board.get(intent.to).copied(),
            category: None,
            promoted: false,
        })
    }

    pub fn intent(&self) -> MoveIntent {
        MoveIntent::new(self.from, self.to)
    }

    /// Whether the move captures, including en passant
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.category == Some(MoveCategory::EnPassant)
    }
}

/// Pieces a pawn may promote to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Knight,
    Bishop,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Knight,
        PromotionChoice::Bishop,
    ];

    /// Default key mapping: `Q`, `R`, `N`, `B` in either case
    pub fn from_key(key: char) -> ChessEngineResult<Self> {
        match key.to_ascii_uppercase() {
            'Q' => Ok(PromotionChoice::Queen),
            'R' => Ok(PromotionChoice::Rook),
            'N' => Ok(PromotionChoice::Knight),
            'B' => Ok(PromotionChoice::Bishop),
            _ => Err(ChessEngineError::UnknownPromotion { key }),
        }
    }

    pub fn piece_type(self) -> PieceType {
        match self {
            PromotionChoice::Queen => PieceType::Queen,
            PromotionChoice::Rook => PieceType::Rook,
            PromotionChoice::Knight => PieceType::Knight,
            PromotionChoice::Bishop => PieceType::Bishop,
        }
    }
}

/// Result of one [`crate::Game::step`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepResult {
    /// Start conditions are malformed (both players share a color)
    Invalid,
    /// Nothing changed: no intent, or the intent was illegal
    Still,
    /// A move was committed and the side to move switched
    TurnPassed,
    /// A pawn waits for a promotion choice; move intents are ignored
    AwaitingPromotion,
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Paused,
}

/// Square color, for rendering layers only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareShade {
    Light,
    Dark,
}
