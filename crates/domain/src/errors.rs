//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Cadence
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CadenceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CadenceError {
    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CadenceError::NotFound("integration 'zoom'".to_string());
        assert_eq!(err.to_string(), "Not found: integration 'zoom'");
    }

    #[test]
    fn test_error_labels() {
        assert_eq!(CadenceError::Config(String::new()).label(), "config");
        assert_eq!(CadenceError::NotFound(String::new()).label(), "not_found");
        assert_eq!(CadenceError::InvalidInput(String::new()).label(), "invalid_input");
        assert_eq!(CadenceError::Internal(String::new()).label(), "internal");
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = CadenceError::InvalidInput("duplicate id".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "InvalidInput");
        assert_eq!(json["message"], "duplicate id");
    }
}
