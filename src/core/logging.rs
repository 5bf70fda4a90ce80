//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter. `RUST_LOG` wins over the
//! filter from the settings file.

use tracing_subscriber::EnvFilter;

use super::error::{CoreError, CoreResult};

/// Install the global subscriber; fails if one is already installed
pub fn init_logging(default_filter: &str) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| CoreError::Logging {
            message: format!("bad filter {default_filter:?}: {e}"),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CoreError::Logging {
            message: e.to_string(),
        })
}
