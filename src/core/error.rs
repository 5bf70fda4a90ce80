//! Error types for core module
//!
//! Covers settings persistence, logging setup and the text input policies.
//! Rule violations during play never show up here; the engine reports them
//! as step results.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Two promotion choices mapped to the same key
    #[error("Promotion key {key:?} is bound more than once")]
    KeymapConflict { key: char },

    /// Move text that is not `<from><to>[promotion]`
    #[error("Invalid move text {text:?}: {reason}")]
    MoveText { text: String, reason: String },

    /// Error reported by the rules engine
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),

    /// Logging could not be initialised
    #[error("Logging initialisation failed: {message}")]
    Logging { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
