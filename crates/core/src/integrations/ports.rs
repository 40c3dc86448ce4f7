//! Port interfaces for integration catalogs
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use cadence_domain::{IntegrationDescriptor, Result};

/// Trait for loading the integration catalog
pub trait CatalogSource: Send + Sync {
    /// Human-readable name used in logs (e.g. "builtin", a file path)
    fn source_name(&self) -> &str;

    /// Load descriptors in display order
    fn load_descriptors(&self) -> Result<Vec<IntegrationDescriptor>>;
}
