//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, uses [`Config::default`]
//!
//! ## Environment Variables
//! - `CADENCE_SEED_CONNECTIONS`: Comma-separated integration ids connected at
//!   session start (required for env loading; may be empty)
//! - `CADENCE_CATALOG_PATH`: Catalog file path (optional)
//! - `CADENCE_LOG_LEVEL`: Log level or filter directive (optional)
//! - `CADENCE_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./cadence.json` or `./cadence.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use cadence_domain::constants::DEFAULT_LOG_LEVEL;
use cadence_domain::{
    CadenceError, CatalogConfig, Config, ConnectionsConfig, LoggingConfig, Result,
};

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to a config file, and finally to
/// defaults when no file exists.
///
/// # Errors
/// Returns `CadenceError::Config` if a config file exists but cannot be read
/// or parsed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `CADENCE_SEED_CONNECTIONS` must be present; the other variables fall back
/// to defaults.
///
/// # Errors
/// Returns `CadenceError::Config` if the seed variable is missing.
pub fn load_from_env() -> Result<Config> {
    let seed = parse_seed_list(&env_var("CADENCE_SEED_CONNECTIONS")?);
    let catalog_path =
        std::env::var("CADENCE_CATALOG_PATH").ok().filter(|path| !path.trim().is_empty());
    let level =
        std::env::var("CADENCE_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let json = env_bool("CADENCE_LOG_JSON", false);

    Ok(Config {
        catalog: CatalogConfig { path: catalog_path },
        connections: ConnectionsConfig { seed },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CadenceError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CadenceError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CadenceError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CadenceError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    parse_by_extension(contents, path)
}

/// Deserialize JSON or TOML content, choosing the format from `path`.
///
/// Shared with the file catalog source.
pub(crate) fn parse_by_extension<T>(contents: &str, path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(CadenceError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            bases.push(exe_dir.to_path_buf());
        }
    }

    first_existing(&bases)
}

/// First candidate file that exists, searching `bases` in order
fn first_existing(bases: &[PathBuf]) -> Option<PathBuf> {
    bases.iter().flat_map(|base| candidate_files(base)).find(|path| path.exists())
}

fn candidate_files(base: &Path) -> Vec<PathBuf> {
    vec![
        base.join("config.json"),
        base.join("config.toml"),
        base.join("cadence.json"),
        base.join("cadence.toml"),
        base.join("../config.json"),
        base.join("../config.toml"),
        base.join("../../config.json"),
        base.join("../../config.toml"),
    ]
}

/// Split a comma-separated id list, dropping blanks
fn parse_seed_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|id| !id.is_empty()).map(str::to_string).collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CadenceError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
