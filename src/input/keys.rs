//! Promotion key mapping
//!
//! Which key picks which promotion piece. The default is `Q`, `R`, `N`, `B`;
//! matching is case-insensitive.

use chess_engine::{ChessEngineError, ChessEngineResult, PromotionChoice};
use serde::{Deserialize, Serialize};

use crate::core::{CoreError, CoreResult};

/// Key bound to each promotion choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionKeymap {
    pub queen: char,
    pub rook: char,
    pub knight: char,
    pub bishop: char,
}

impl Default for PromotionKeymap {
    fn default() -> Self {
        Self {
            queen: 'q',
            rook: 'r',
            knight: 'n',
            bishop: 'b',
        }
    }
}

impl PromotionKeymap {
    fn bindings(&self) -> [(char, PromotionChoice); 4] {
        [
            (self.queen, PromotionChoice::Queen),
            (self.rook, PromotionChoice::Rook),
            (self.knight, PromotionChoice::Knight),
            (self.bishop, PromotionChoice::Bishop),
        ]
    }

    /// Choice bound to `key`
    pub fn choice_for(&self, key: char) -> ChessEngineResult<PromotionChoice> {
        self.bindings()
            .into_iter()
            .find(|(bound, _)| bound.eq_ignore_ascii_case(&key))
            .map(|(_, choice)| choice)
            .ok_or(ChessEngineError::UnknownPromotion { key })
    }

    /// Key bound to `choice`, lower-case
    pub fn key_for(&self, choice: PromotionChoice) -> char {
        self.bindings()
            .into_iter()
            .find(|(_, bound)| *bound == choice)
            .map(|(key, _)| key.to_ascii_lowercase())
            .unwrap_or('q')
    }

    /// Reject maps that bind one key to two choices
    pub fn validate(&self) -> CoreResult<()> {
        let keys = self.bindings().map(|(key, _)| key.to_ascii_lowercase());
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(CoreError::KeymapConflict { key: *key });
            }
        }
        Ok(())
    }
}
