//! Connection store
//!
//! Set of connected integrations keyed by id. Records keep insertion order so
//! the "connected integrations" view lists them in the order they were
//! connected. Mutation is restricted to this crate; the reconciliation
//! service is the only writer.

use ahash::AHashSet;
use cadence_domain::ConnectionRecord;
use tracing::warn;

use super::catalog::IntegrationCatalog;

/// Currently connected integrations
#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    records: Vec<ConnectionRecord>,
    ids: AHashSet<String>,
}

impl ConnectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the session seed connected.
    ///
    /// Seed ids missing from the catalog are skipped with a warning; repeated
    /// ids produce a single record.
    pub fn seeded<I, S>(catalog: &IntegrationCatalog, seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();

        for id in seed {
            let id = id.as_ref();
            match catalog.find_by_id(id) {
                Some(descriptor) => {
                    store.insert(ConnectionRecord::from_descriptor(descriptor));
                }
                None => warn!(integration_id = id, "seed integration not in catalog, skipping"),
            }
        }

        store
    }

    /// O(1) membership test
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ConnectionRecord] {
        &self.records
    }

    /// Number of active connections.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when nothing is connected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record unless its id is already present.
    ///
    /// Returns `false` and leaves the store untouched for a duplicate.
    pub(crate) fn insert(&mut self, record: ConnectionRecord) -> bool {
        if !self.ids.insert(record.id.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove the record for `id`, if any.
    pub(crate) fn remove(&mut self, id: &str) -> Option<ConnectionRecord> {
        if !self.ids.remove(id) {
            return None;
        }
        let position = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(position))
    }
}
