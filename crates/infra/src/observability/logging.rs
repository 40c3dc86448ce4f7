//! Tracing subscriber bootstrap

use cadence_domain::{CadenceError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Output is
/// human-readable unless `config.json` is enabled.
///
/// # Errors
/// - `CadenceError::Config` if the configured level is not a valid filter
/// - `CadenceError::Internal` if a global subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_level(&config.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| {
        CadenceError::Internal(format!("Failed to install tracing subscriber: {e}"))
    })?;

    tracing::debug!(level = %config.level, json = config.json, "logging initialised");
    Ok(())
}

/// Parse a level or filter directive (e.g. `info`, `cadence_core=debug`)
fn filter_from_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| CadenceError::Config(format!("Invalid log level '{level}': {e}")))
}
