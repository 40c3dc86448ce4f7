use std::sync::atomic::{AtomicUsize, Ordering};

use cadence_core::CatalogSource;
use cadence_domain::{CadenceError, IntegrationDescriptor, Result as DomainResult};

/// In-memory `CatalogSource` returning a fixed descriptor list.
///
/// Counts loads so tests can assert the catalog is read once per build.
#[derive(Default)]
pub struct MockCatalogSource {
    descriptors: Vec<IntegrationDescriptor>,
    fail_with: Option<String>,
    loads: AtomicUsize,
}

impl MockCatalogSource {
    pub fn new(descriptors: Vec<IntegrationDescriptor>) -> Self {
        Self { descriptors, ..Self::default() }
    }

    /// A source whose loads always fail with `CadenceError::Config`.
    pub fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl CatalogSource for MockCatalogSource {
    fn source_name(&self) -> &str {
        "mock"
    }

    fn load_descriptors(&self) -> DomainResult<Vec<IntegrationDescriptor>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(CadenceError::Config(message.clone())),
            None => Ok(self.descriptors.clone()),
        }
    }
}

/// Catalog used across the scenario tests.
pub fn sample_descriptors() -> Vec<IntegrationDescriptor> {
    vec![
        IntegrationDescriptor::new("google-calendar", "Google Calendar", "Calendar")
            .with_description("Sync events with Google Calendar"),
        IntegrationDescriptor::new("outlook", "Microsoft Outlook", "Calendar")
            .with_description("Sync events with Outlook and Microsoft 365"),
        IntegrationDescriptor::new("zoom", "Zoom", "Video Conferencing")
            .with_description("Generate Zoom links for bookings"),
        IntegrationDescriptor::new("google-meet", "Google Meet", "Video Conferencing"),
        IntegrationDescriptor::new("slack", "Slack", "Messaging"),
        IntegrationDescriptor::new("webhooks", "Webhooks", "Automation"),
    ]
}
