//! Tunable rule parameters
//!
//! Defaults reproduce standard chess. Every field is optional when
//! deserializing, so a settings file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};

/// Rule parameters for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Side length N of the N×N board
    pub board_size: u8,
    /// Value the fifty-move countdown resets to after a pawn move or capture
    pub fifty_move_countdown: u32,
    /// Occurrences of one fingerprint that end the game in a draw
    pub repetition_limit: usize,
    /// Material each side must stay strictly below for a material draw
    pub material_draw_threshold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            fifty_move_countdown: FIFTY_MOVE_COUNTDOWN,
            repetition_limit: REPETITION_LIMIT,
            material_draw_threshold: MATERIAL_DRAW_THRESHOLD,
        }
    }
}

impl RulesConfig {
    /// Reject values no game can be played with
    ///
    /// The board must fit the default layout and single-letter files, and a
    /// repetition limit of zero would draw the opening position.
    pub fn validate(&self) -> ChessEngineResult<()> {
        if !(STANDARD_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ChessEngineError::UnsupportedBoardSize {
                size: self.board_size,
            });
        }
        if self.repetition_limit == 0 {
            return Err(ChessEngineError::InvalidRulesConfig {
                reason: "repetition_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
