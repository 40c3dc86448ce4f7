//! Read-only views over catalog and store
//!
//! Recomputed on every call so connection status is never stale.

use cadence_domain::{CategoryGroup, ConnectionRecord, ProjectedIntegration};

use super::catalog::IntegrationCatalog;
use super::store::ConnectionStore;

/// Group every catalog entry under its category.
///
/// Categories follow [`IntegrationCatalog::list_categories`]; entries keep
/// catalog order and carry `connected` as of this call.
pub fn project_by_category(
    catalog: &IntegrationCatalog,
    store: &ConnectionStore,
) -> Vec<CategoryGroup> {
    catalog
        .list_categories()
        .into_iter()
        .map(|category| {
            let integrations: Vec<ProjectedIntegration> = catalog
                .in_category(category)
                .map(|descriptor| ProjectedIntegration {
                    descriptor: descriptor.clone(),
                    connected: store.contains(&descriptor.id),
                })
                .collect();
            let connected_count = integrations.iter().filter(|entry| entry.connected).count();

            CategoryGroup { category: category.to_string(), integrations, connected_count }
        })
        .collect()
}

/// Connected records in insertion order
pub fn connected_summary(store: &ConnectionStore) -> Vec<ConnectionRecord> {
    store.records().to_vec()
}
