//! Domain types and models

pub mod integration;

pub use integration::{
    CategoryGroup, ConnectionRecord, ConnectionState, IntegrationDescriptor, ProjectedIntegration,
    ToggleOutcome,
};
