//! Integration catalog
//!
//! Ordered, immutable list of integration descriptors. Declaration order is
//! significant: it drives category order and the order of entries within a
//! category.

use ahash::{AHashMap, AHashSet};
use cadence_domain::{CadenceError, IntegrationDescriptor, Result};
use tracing::debug;

use super::ports::CatalogSource;

/// Immutable catalog of supported integrations, indexed by id
#[derive(Debug, Clone, Default)]
pub struct IntegrationCatalog {
    entries: Vec<IntegrationDescriptor>,
    index: AHashMap<String, usize>,
}

impl IntegrationCatalog {
    /// Build a catalog from descriptors in declaration order.
    ///
    /// # Errors
    /// Returns `CadenceError::InvalidInput` if an id is empty or appears more
    /// than once.
    pub fn new(entries: Vec<IntegrationDescriptor>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(entries.len());

        for (position, descriptor) in entries.iter().enumerate() {
            if descriptor.id.trim().is_empty() {
                return Err(CadenceError::InvalidInput(format!(
                    "integration at position {position} has an empty id"
                )));
            }
            if index.insert(descriptor.id.clone(), position).is_some() {
                return Err(CadenceError::InvalidInput(format!(
                    "duplicate integration id '{}'",
                    descriptor.id
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Load and validate a catalog from a [`CatalogSource`].
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let descriptors = source.load_descriptors()?;
        let catalog = Self::new(descriptors)?;
        debug!(
            source = source.source_name(),
            integrations = catalog.len(),
            "integration catalog loaded"
        );
        Ok(catalog)
    }

    /// All descriptors in declaration order
    pub fn list_all(&self) -> &[IntegrationDescriptor] {
        &self.entries
    }

    /// Distinct categories in first-seen order
    pub fn list_categories(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.entries
            .iter()
            .map(|descriptor| descriptor.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Descriptors in `category`, in declaration order
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a IntegrationDescriptor> + 'a {
        self.entries.iter().filter(move |descriptor| descriptor.category == category)
    }

    /// Looks up a descriptor by id.
    pub fn find_by_id(&self, id: &str) -> Option<&IntegrationDescriptor> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Returns `true` if the catalog has a descriptor with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of descriptors in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
