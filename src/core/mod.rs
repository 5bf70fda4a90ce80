//! Core module - settings, logging and error types
//!
//! # Architecture Overview
//!
//! - [`RefereeSettings`] - rule parameters, promotion keys and log filter
//! - `settings_persistence` - JSON load/save in the user's config directory
//! - `logging` - `tracing-subscriber` initialisation for the binary
//! - [`CoreError`] - errors of everything outside the rules engine

pub mod error;
pub mod logging;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use resources::{RefereeSettings, DEFAULT_LOG_FILTER};
pub use settings_persistence::{
    default_settings_path, load_settings, read_settings, save_settings, SETTINGS_FILENAME,
};
