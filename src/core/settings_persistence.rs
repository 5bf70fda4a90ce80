//! Settings persistence
//!
//! Loads and saves [`RefereeSettings`] as JSON.
//!
//! # File Location
//!
//! Without an explicit path, settings live in `settings.json` in the user's
//! configuration directory, e.g. `~/.config/chessreferee/settings.json`.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing, unreadable, malformed or
//! inconsistent file is logged and replaced by the defaults. [`read_settings`]
//! and [`save_settings`] report errors to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use super::error::CoreResult;
use super::resources::RefereeSettings;

/// Settings filename
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Path of `settings.json` in the user's configuration directory
///
/// Falls back to `settings.json` in the working directory when no config
/// directory can be determined.
pub fn default_settings_path() -> PathBuf {
    match ProjectDirs::from("com", "trilltino", "ChessReferee") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read and validate settings from `path`
pub fn read_settings(path: &Path) -> CoreResult<RefereeSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: RefereeSettings = serde_json::from_str(&contents)?;
    settings.rules.validate()?;
    settings.promotion_keys.validate()?;
    Ok(settings)
}

/// Load settings from `path` (or the default location), falling back to defaults
pub fn load_settings(path: Option<&Path>) -> RefereeSettings {
    let settings_path = path.map(Path::to_path_buf).unwrap_or_else(default_settings_path);

    if !settings_path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            settings_path
        );
        return RefereeSettings::default();
    }

    match read_settings(&settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            RefereeSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &RefereeSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
