//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use cadence_domain::CadenceError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CadenceError);

impl From<InfraError> for CadenceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CadenceError> for InfraError {
    fn from(value: CadenceError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCadenceError {
    fn into_cadence(self) -> CadenceError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CadenceError */
/* -------------------------------------------------------------------------- */

impl IntoCadenceError for IoError {
    fn into_cadence(self) -> CadenceError {
        match self.kind() {
            ErrorKind::NotFound => CadenceError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                CadenceError::Config(format!("permission denied reading file: {self}"))
            }
            ErrorKind::InvalidData => {
                CadenceError::InvalidInput(format!("file is not valid UTF-8: {self}"))
            }
            _ => CadenceError::Internal(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_cadence())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CadenceError */
/* -------------------------------------------------------------------------- */

impl IntoCadenceError for JsonError {
    fn into_cadence(self) -> CadenceError {
        CadenceError::Config(format!(
            "Invalid JSON format at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_cadence())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → CadenceError */
/* -------------------------------------------------------------------------- */

impl IntoCadenceError for TomlError {
    fn into_cadence(self) -> CadenceError {
        CadenceError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_cadence())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err = IoError::new(ErrorKind::NotFound, "catalog.json");
        let mapped: CadenceError = InfraError::from(err).into();
        assert!(matches!(mapped, CadenceError::NotFound(_)));
    }

    #[test]
    fn io_other_maps_to_internal() {
        let err = IoError::new(ErrorKind::Other, "disk on fire");
        let mapped: CadenceError = InfraError::from(err).into();
        match mapped {
            CadenceError::Internal(msg) => assert!(msg.contains("disk on fire")),
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn json_error_reports_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let mapped: CadenceError = InfraError::from(err).into();
        match mapped {
            CadenceError::Config(msg) => assert!(msg.contains("line 2")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn toml_error_maps_to_config() {
        let err = toml::from_str::<toml::Value>("key = = 1").unwrap_err();
        let mapped: CadenceError = InfraError::from(err).into();
        assert!(matches!(mapped, CadenceError::Config(_)));
    }

    #[test]
    fn domain_error_round_trips_through_newtype() {
        let original = CadenceError::InvalidInput("bad id".into());
        let back: CadenceError = InfraError::from(original.clone()).into();
        assert_eq!(back, original);
    }
}
