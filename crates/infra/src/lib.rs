//! # Cadence Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Catalog sources (built-in list, JSON/TOML files)
//! - Configuration loading (environment, files)
//! - Logging bootstrap
//! - The composition root wiring core services together
//!
//! ## Architecture
//! - Implements traits defined in `cadence-core`
//! - Depends on `cadence-domain` and `cadence-core`
//! - Contains all "impure" code (file I/O, global subscriber)

pub mod catalog;
pub mod config;
pub mod context;
pub mod errors;
pub mod observability;

// Re-export commonly used items
pub use catalog::{source_from_config, BuiltinCatalogSource, FileCatalogSource};
pub use context::IntegrationContext;
pub use errors::InfraError;
pub use observability::init_logging;
