//! Integration context - dependency injection container
//!
//! Composition root for the integrations screen: loads the catalog from the
//! configured source, seeds the connection store, and hands out the shared
//! reconciliation service.

use std::sync::Arc;

use cadence_core::{
    CatalogSource, IntegrationCatalog, ReconciliationService, SharedReconciliationService,
};
use cadence_domain::{Config, Result};

use crate::catalog::source_from_config;
use crate::config;

/// Application context - holds configuration and the integration service
pub struct IntegrationContext {
    pub config: Config,
    pub integrations: Arc<SharedReconciliationService>,
}

impl IntegrationContext {
    /// Load configuration (env, file, defaults) and build the context
    pub fn load() -> Result<Self> {
        Self::from_config(config::load()?)
    }

    /// Build the context using the catalog source named by `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let source = source_from_config(&config.catalog);
        Self::with_source(config, source.as_ref())
    }

    /// Build the context from an explicit catalog source
    ///
    /// # Errors
    /// Propagates catalog loading and validation errors.
    pub fn with_source(config: Config, source: &dyn CatalogSource) -> Result<Self> {
        let catalog = Arc::new(IntegrationCatalog::from_source(source).map_err(|err| {
            tracing::error!(
                source = source.source_name(),
                error = %err,
                error_type = err.label(),
                "failed to load integration catalog"
            );
            err
        })?);

        let service = ReconciliationService::with_seed(catalog, &config.connections.seed);
        tracing::info!(
            source = source.source_name(),
            integrations = service.catalog().len(),
            connected = service.store().len(),
            "integration context ready"
        );

        Ok(Self { config, integrations: Arc::new(SharedReconciliationService::new(service)) })
    }
}
