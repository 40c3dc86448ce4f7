//! Catalog source adapters

pub mod builtin;
pub mod file;

use cadence_core::CatalogSource;
use cadence_domain::CatalogConfig;

pub use builtin::BuiltinCatalogSource;
pub use file::FileCatalogSource;

/// Pick the catalog source named by configuration
pub fn source_from_config(config: &CatalogConfig) -> Box<dyn CatalogSource> {
    match config.path.as_deref() {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource),
    }
}
