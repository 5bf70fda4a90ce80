//! Referee settings
//!
//! User-tunable values for a session: the rule parameters handed to the
//! engine, the promotion key mapping used by text input, and the default
//! log filter. Every field is optional in the settings file.

use chess_engine::RulesConfig;
use serde::{Deserialize, Serialize};

use crate::input::PromotionKeymap;

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for a referee session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefereeSettings {
    /// Rule parameters passed to [`chess_engine::Game::with_config`]
    pub rules: RulesConfig,
    /// Keys that select a promotion piece
    pub promotion_keys: PromotionKeymap,
    /// `tracing` filter directive, e.g. `"chess_engine=debug,info"`
    pub log_filter: String,
}

impl Default for RefereeSettings {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            promotion_keys: PromotionKeymap::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
