//! Thread-safe reconciliation service
//!
//! One mutex guards the whole service so a toggle's membership check and
//! insert/remove happen under the same lock. Concurrent toggles of one id
//! therefore serialize and can never leave two records behind.

use std::sync::Arc;

use cadence_domain::{
    CategoryGroup, ConnectionRecord, ConnectionState, IntegrationDescriptor, ToggleOutcome,
};
use parking_lot::Mutex;

use super::catalog::IntegrationCatalog;
use super::service::ReconciliationService;

/// [`ReconciliationService`] behind a single lock
#[derive(Debug)]
pub struct SharedReconciliationService {
    catalog: Arc<IntegrationCatalog>,
    inner: Mutex<ReconciliationService>,
}

impl SharedReconciliationService {
    /// Wraps `service` for shared access across threads.
    pub fn new(service: ReconciliationService) -> Self {
        Self { catalog: service.catalog_handle(), inner: Mutex::new(service) }
    }

    /// The catalog is immutable and can be read without the lock
    pub fn catalog(&self) -> &IntegrationCatalog {
        &self.catalog
    }

    /// All catalog descriptors in catalog order.
    pub fn list_all(&self) -> &[IntegrationDescriptor] {
        self.catalog.list_all()
    }

    /// Distinct categories in first-appearance order.
    pub fn list_categories(&self) -> Vec<&str> {
        self.catalog.list_categories()
    }

    /// Looks up a catalog descriptor by id.
    pub fn find_by_id(&self, id: &str) -> Option<&IntegrationDescriptor> {
        self.catalog.find_by_id(id)
    }

    /// Toggles the connection for `id` under the lock.
    pub fn toggle(&self, id: &str) -> ToggleOutcome {
        self.inner.lock().toggle(id)
    }

    /// Returns `true` if `id` is currently connected.
    pub fn is_connected(&self, id: &str) -> bool {
        self.inner.lock().is_connected(id)
    }

    /// Connection state for `id`.
    pub fn connection_state(&self, id: &str) -> ConnectionState {
        self.inner.lock().connection_state(id)
    }

    /// Groups the catalog by category with current connection flags.
    pub fn project_by_category(&self) -> Vec<CategoryGroup> {
        self.inner.lock().project_by_category()
    }

    /// Snapshot of the active connection records.
    pub fn connected_summary(&self) -> Vec<ConnectionRecord> {
        self.inner.lock().connected_summary()
    }

    /// Run a read-only closure against a consistent view of the service
    pub fn read<R>(&self, f: impl FnOnce(&ReconciliationService) -> R) -> R {
        f(&*self.inner.lock())
    }
}
