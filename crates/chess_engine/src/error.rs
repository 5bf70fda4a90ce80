//! Error types for chess engine
//!
//! Rule violations during play are never errors: an illegal move intent is
//! answered with [`crate::types::StepResult::Still`]. The variants here cover
//! malformed caller input (square text, promotion keys), invalid game
//! configuration, and commits that no longer match the board.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square text that is not `<file letter><rank number>`
    #[error("Invalid square notation: {text:?}")]
    InvalidSquare { text: String },

    /// Square outside the N×N board
    #[error("Square ({file}, {rank}) is outside a {size}x{size} board")]
    SquareOutOfBounds { file: u8, rank: u8, size: u8 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: String },

    /// Both players were configured with the same color
    #[error("Both players share the color {color}")]
    SameColorPlayers { color: String },

    /// Promotion key outside the active keymap
    #[error("Unknown promotion key {key:?}")]
    UnknownPromotion { key: char },

    /// Declared start or end piece does not match the board
    #[error("Move {from}-{to} does not match the current board")]
    StaleMove { from: String, to: String },

    /// Board size the default layout cannot be placed on
    #[error("Unsupported board size {size} (expected 8 to 26)")]
    UnsupportedBoardSize { size: u8 },

    /// Rule parameter that would make every game end at once
    #[error("Invalid rules config: {reason}")]
    InvalidRulesConfig { reason: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
