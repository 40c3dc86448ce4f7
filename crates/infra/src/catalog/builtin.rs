//! Built-in integration catalog
//!
//! The integrations the product ships with, in display order.

use cadence_core::CatalogSource;
use cadence_domain::constants::{
    CATEGORY_AUTOMATION, CATEGORY_CALENDAR, CATEGORY_MESSAGING, CATEGORY_VIDEO_CONFERENCING,
};
use cadence_domain::{IntegrationDescriptor, Result};

/// (id, name, description, category, icon)
type CatalogRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

const BUILTIN_INTEGRATIONS: &[CatalogRow] = &[
    (
        "google-calendar",
        "Google Calendar",
        "Check availability and add bookings to Google Calendar",
        CATEGORY_CALENDAR,
        "calendar-google",
    ),
    (
        "outlook",
        "Microsoft Outlook",
        "Sync events with Outlook and Microsoft 365 calendars",
        CATEGORY_CALENDAR,
        "calendar-outlook",
    ),
    (
        "apple-calendar",
        "Apple Calendar",
        "Connect iCloud calendars to avoid double bookings",
        CATEGORY_CALENDAR,
        "calendar-apple",
    ),
    (
        "caldav",
        "CalDAV",
        "Connect any CalDAV-compatible calendar server",
        CATEGORY_CALENDAR,
        "calendar-generic",
    ),
    (
        "zoom",
        "Zoom",
        "Create a Zoom meeting link for every booking",
        CATEGORY_VIDEO_CONFERENCING,
        "video-zoom",
    ),
    (
        "google-meet",
        "Google Meet",
        "Attach a Google Meet link to booked events",
        CATEGORY_VIDEO_CONFERENCING,
        "video-meet",
    ),
    (
        "microsoft-teams",
        "Microsoft Teams",
        "Host booked meetings in Microsoft Teams",
        CATEGORY_VIDEO_CONFERENCING,
        "video-teams",
    ),
    (
        "slack",
        "Slack",
        "Post booking notifications to a Slack channel",
        CATEGORY_MESSAGING,
        "chat-slack",
    ),
    (
        "discord",
        "Discord",
        "Send booking updates to a Discord server",
        CATEGORY_MESSAGING,
        "chat-discord",
    ),
    (
        "zapier",
        "Zapier",
        "Trigger Zapier workflows from booking events",
        CATEGORY_AUTOMATION,
        "automation-zapier",
    ),
    (
        "webhooks",
        "Webhooks",
        "Deliver booking events to your own HTTP endpoint",
        CATEGORY_AUTOMATION,
        "automation-webhook",
    ),
];

/// Catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    /// Built-in descriptors in catalog order.
    pub fn descriptors() -> Vec<IntegrationDescriptor> {
        BUILTIN_INTEGRATIONS
            .iter()
            .map(|&(id, name, description, category, icon)| {
                IntegrationDescriptor::new(id, name, category)
                    .with_description(description)
                    .with_icon(icon)
            })
            .collect()
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn source_name(&self) -> &str {
        "builtin"
    }

    fn load_descriptors(&self) -> Result<Vec<IntegrationDescriptor>> {
        Ok(Self::descriptors())
    }
}

#[cfg(test)]
mod tests {
    use cadence_core::IntegrationCatalog;
    use cadence_domain::constants::DEFAULT_SEED_CONNECTIONS;

    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = IntegrationCatalog::from_source(&BuiltinCatalogSource).unwrap();
        assert_eq!(catalog.len(), BUILTIN_INTEGRATIONS.len());
    }

    #[test]
    fn builtin_categories_in_display_order() {
        let catalog = IntegrationCatalog::from_source(&BuiltinCatalogSource).unwrap();
        assert_eq!(
            catalog.list_categories(),
            vec!["Calendar", "Video Conferencing", "Messaging", "Automation"]
        );
    }

    #[test]
    fn default_seed_resolves_against_builtin_catalog() {
        let catalog = IntegrationCatalog::from_source(&BuiltinCatalogSource).unwrap();
        for id in DEFAULT_SEED_CONNECTIONS {
            assert!(catalog.contains(id), "default seed id {id} missing from builtin catalog");
        }
    }

    #[test]
    fn outlook_uses_full_product_name() {
        let catalog = IntegrationCatalog::from_source(&BuiltinCatalogSource).unwrap();
        assert_eq!(catalog.find_by_id("outlook").unwrap().name, "Microsoft Outlook");
    }
}
