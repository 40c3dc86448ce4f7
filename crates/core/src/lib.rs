//! # Cadence Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The integration catalog and connection store
//! - The reconciliation service (toggle, membership queries)
//! - Category projections for the presentation layer
//! - Port interfaces (traits) for catalog sources
//!
//! ## Architecture Principles
//! - Only depends on `cadence-domain`
//! - No file, network, or platform code
//! - All external dependencies via traits
//! - Synchronous: every operation completes before returning

pub mod integrations;

pub use integrations::{
    connected_summary, project_by_category, CatalogSource, ConnectionStore, IntegrationCatalog,
    ReconciliationService, SharedReconciliationService,
};
