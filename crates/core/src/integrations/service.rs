//! Reconciliation service - the single writer of the connection store

use std::sync::Arc;

use cadence_domain::{
    CategoryGroup, ConnectionRecord, ConnectionState, IntegrationDescriptor, ToggleOutcome,
};
use tracing::{info, warn};

use super::catalog::IntegrationCatalog;
use super::projection;
use super::store::ConnectionStore;

/// Owns the connection store and applies toggle requests against the catalog
#[derive(Debug, Clone)]
pub struct ReconciliationService {
    catalog: Arc<IntegrationCatalog>,
    store: ConnectionStore,
}

impl ReconciliationService {
    /// Create a service with nothing connected
    pub fn new(catalog: Arc<IntegrationCatalog>) -> Self {
        Self { catalog, store: ConnectionStore::new() }
    }

    /// Create a service with the session seed connected
    pub fn with_seed<I, S>(catalog: Arc<IntegrationCatalog>, seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = ConnectionStore::seeded(&catalog, seed);
        Self { catalog, store }
    }

    /// The catalog this service reconciles against.
    pub fn catalog(&self) -> &IntegrationCatalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    pub fn catalog_handle(&self) -> Arc<IntegrationCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Read-only view of the store
    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// Returns `true` if `id` is currently connected.
    pub fn is_connected(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Connection state for `id`.
    pub fn connection_state(&self, id: &str) -> ConnectionState {
        ConnectionState::from(self.is_connected(id))
    }

    /// Looks up a catalog descriptor by id.
    pub fn find_by_id(&self, id: &str) -> Option<&IntegrationDescriptor> {
        self.catalog.find_by_id(id)
    }

    /// Distinct catalog categories in first-appearance order.
    pub fn list_categories(&self) -> Vec<&str> {
        self.catalog.list_categories()
    }

    /// Flip the connection state of `id`.
    ///
    /// A connected id is disconnected whether or not the catalog still knows
    /// it. An unknown id that is not connected cannot be connected (there is
    /// no name to copy) and is ignored. Only `id` is ever affected.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(removed) = self.store.remove(id) {
            info!(integration_id = id, name = %removed.name, "integration disconnected");
            return ToggleOutcome::Disconnected;
        }

        let Some(descriptor) = self.catalog.find_by_id(id) else {
            warn!(integration_id = id, "toggle ignored: integration not in catalog");
            return ToggleOutcome::Ignored;
        };

        let record = ConnectionRecord::from_descriptor(descriptor);
        let inserted = self.store.insert(record);
        debug_assert!(inserted, "membership was checked before insert");
        info!(integration_id = id, name = %descriptor.name, "integration connected");
        ToggleOutcome::Connected
    }

    /// Catalog grouped by category with live connection status
    pub fn project_by_category(&self) -> Vec<CategoryGroup> {
        projection::project_by_category(&self.catalog, &self.store)
    }

    /// Connected integrations in connection order
    pub fn connected_summary(&self) -> Vec<ConnectionRecord> {
        projection::connected_summary(&self.store)
    }
}
