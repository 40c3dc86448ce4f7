//! Integration connection reconciliation
//!
//! - [`catalog`]: the fixed list of integrations the product supports
//! - [`store`]: the set of currently connected integrations
//! - [`service`]: the toggle operation and membership queries
//! - [`projection`]: read-only views combining catalog and store
//! - [`shared`]: a lock-guarded service for multi-threaded callers

pub mod catalog;
pub mod ports;
pub mod projection;
pub mod service;
pub mod shared;
pub mod store;

pub use catalog::IntegrationCatalog;
pub use ports::CatalogSource;
pub use projection::{connected_summary, project_by_category};
pub use service::ReconciliationService;
pub use shared::SharedReconciliationService;
pub use store::ConnectionStore;
