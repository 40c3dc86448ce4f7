//! File-backed integration catalog
//!
//! JSON:
//! ```json
//! { "integrations": [ { "id": "zoom", "name": "Zoom", "category": "Video Conferencing" } ] }
//! ```
//!
//! TOML:
//! ```toml
//! [[integrations]]
//! id = "zoom"
//! name = "Zoom"
//! category = "Video Conferencing"
//! ```

use std::path::{Path, PathBuf};

use cadence_core::CatalogSource;
use cadence_domain::{CadenceError, IntegrationDescriptor, Result};
use serde::Deserialize;

use crate::config::loader::parse_by_extension;
use crate::errors::InfraError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    integrations: Vec<IntegrationDescriptor>,
}

/// Catalog read from a JSON or TOML file on every load
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    name: String,
}

impl FileCatalogSource {
    /// Creates a source that reads descriptors from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path the catalog is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load_descriptors(&self) -> Result<Vec<IntegrationDescriptor>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            let mapped: CadenceError = InfraError::from(e).into();
            CadenceError::Config(format!("Failed to read catalog file {}: {mapped}", self.name))
        })?;

        let file: CatalogFile = parse_by_extension(&contents, &self.path)?;
        tracing::info!(
            path = %self.name,
            integrations = file.integrations.len(),
            "Loaded integration catalog file"
        );
        Ok(file.integrations)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::Builder;

    use super::*;

    fn write_catalog(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_catalog_in_order() {
        let file = write_catalog(
            r#"{ "integrations": [
                { "id": "zoom", "name": "Zoom", "category": "Video Conferencing", "iconRef": "video" },
                { "id": "outlook", "name": "Microsoft Outlook", "category": "Calendar" }
            ] }"#,
            ".json",
        );

        let descriptors = FileCatalogSource::new(file.path()).load_descriptors().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].id, "zoom");
        assert_eq!(descriptors[0].icon_ref, "video");
        assert_eq!(descriptors[1].name, "Microsoft Outlook");
    }

    #[test]
    fn loads_toml_catalog() {
        let file = write_catalog(
            r#"
[[integrations]]
id = "google-calendar"
name = "Google Calendar"
category = "Calendar"
description = "Primary calendar"

[[integrations]]
id = "slack"
name = "Slack"
category = "Messaging"
"#,
            ".toml",
        );

        let descriptors = FileCatalogSource::new(file.path()).load_descriptors().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].description, "Primary calendar");
        assert_eq!(descriptors[1].category, "Messaging");
    }

    #[test]
    fn missing_file_is_config_error() {
        let source = FileCatalogSource::new("/nonexistent/catalog.json");
        let err = source.load_descriptors().unwrap_err();
        assert!(
            matches!(err, CadenceError::Config(msg) if msg.contains("/nonexistent/catalog.json"))
        );
    }

    #[test]
    fn missing_required_field_is_config_error() {
        let file = write_catalog(r#"{ "integrations": [ { "id": "zoom" } ] }"#, ".json");
        let err = FileCatalogSource::new(file.path()).load_descriptors().unwrap_err();
        assert!(matches!(err, CadenceError::Config(_)));
    }

    #[test]
    fn empty_file_object_yields_no_integrations() {
        let file = write_catalog("{}", ".json");
        let descriptors = FileCatalogSource::new(file.path()).load_descriptors().unwrap();
        assert!(descriptors.is_empty());
    }
}
