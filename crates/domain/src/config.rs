//! Configuration structures
//!
//! Every section has defaults so partial config files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SEED_CONNECTIONS};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub connections: ConnectionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the integration catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (JSON or TOML). `None` selects the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Connection store seeding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionsConfig {
    /// Integration ids connected when a session starts
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,
}

impl Default for ConnectionsConfig {
    fn default() -> Self {
        Self { seed: default_seed() }
    }
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_seed() -> Vec<String> {
    DEFAULT_SEED_CONNECTIONS.iter().map(|id| (*id).to_string()).collect()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.connections.seed, vec!["google-calendar", "zoom"]);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "logging": { "json": true } }"#).unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.connections.seed, vec!["google-calendar", "zoom"]);
    }

    #[test]
    fn test_empty_seed_is_preserved() {
        let config: Config =
            serde_json::from_str(r#"{ "connections": { "seed": [] } }"#).unwrap();
        assert!(config.connections.seed.is_empty());
    }
}
