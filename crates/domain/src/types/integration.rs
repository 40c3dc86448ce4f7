//! Integration catalog and connection types
//!
//! Catalog entries are immutable for the lifetime of a session. Connection
//! records are denormalized snapshots taken when an integration is connected;
//! a record being present is what "connected" means.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Catalog entry describing an integration the product can connect to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "camelCase"))]
pub struct IntegrationDescriptor {
    /// Stable key shared by the catalog and the connection store
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form grouping label (e.g. "Calendar")
    pub category: String,
    /// Opaque glyph reference for the presentation layer
    #[serde(default)]
    pub icon_ref: String,
}

impl IntegrationDescriptor {
    /// Creates a descriptor with no description or icon.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            icon_ref: String::new(),
        }
    }

    /// Sets the human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the icon reference.
    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = icon_ref.into();
        self
    }
}

/// A connected integration.
///
/// Only `id` and `name` are copied from the descriptor. `connected` is always
/// `true` for records that exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "camelCase"))]
pub struct ConnectionRecord {
    pub id: String,
    /// Descriptor name at connection time
    pub name: String,
    pub connected: bool,
}

impl ConnectionRecord {
    /// Builds a connection record copying identity fields from `descriptor`.
    pub fn from_descriptor(descriptor: &IntegrationDescriptor) -> Self {
        Self { id: descriptor.id.clone(), name: descriptor.name.clone(), connected: true }
    }
}

/// Per-integration connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "snake_case"))]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl_domain_status_conversions!(ConnectionState {
    Connected => "connected",
    Disconnected => "disconnected",
});

impl ConnectionState {
    /// Returns `true` for [`ConnectionState::Connected`].
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl From<bool> for ConnectionState {
    fn from(connected: bool) -> Self {
        if connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

/// What a toggle did to the connection store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "snake_case"))]
pub enum ToggleOutcome {
    /// A record was created
    Connected,
    /// The existing record was removed
    Disconnected,
    /// Unknown id that was not connected; nothing changed
    Ignored,
}

impl_domain_status_conversions!(ToggleOutcome {
    Connected => "connected",
    Disconnected => "disconnected",
    Ignored => "ignored",
});

impl ToggleOutcome {
    /// Whether the store changed
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Catalog entry annotated with its live connection status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "camelCase"))]
pub struct ProjectedIntegration {
    #[serde(flatten)]
    pub descriptor: IntegrationDescriptor,
    pub connected: bool,
}

/// All catalog entries sharing one category, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "camelCase"))]
pub struct CategoryGroup {
    pub category: String,
    pub integrations: Vec<ProjectedIntegration>,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub connected_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook() -> IntegrationDescriptor {
        IntegrationDescriptor::new("outlook", "Microsoft Outlook", "Calendar")
            .with_description("Sync events with Outlook and Microsoft 365")
            .with_icon("outlook")
    }

    #[test]
    fn test_record_copies_id_and_name() {
        let record = ConnectionRecord::from_descriptor(&outlook());
        assert_eq!(record.id, "outlook");
        assert_eq!(record.name, "Microsoft Outlook");
        assert!(record.connected);
    }

    #[test]
    fn test_descriptor_uses_camel_case() {
        let json = serde_json::to_value(outlook()).unwrap();
        assert_eq!(json["iconRef"], "outlook");
        assert!(json.get("icon_ref").is_none());
    }

    #[test]
    fn test_descriptor_optional_fields_default() {
        let descriptor: IntegrationDescriptor =
            serde_json::from_str(r#"{"id":"zoom","name":"Zoom","category":"Video Conferencing"}"#)
                .unwrap();
        assert_eq!(descriptor.description, "");
        assert_eq!(descriptor.icon_ref, "");
    }

    #[test]
    fn test_projected_integration_flattens_descriptor() {
        let projected = ProjectedIntegration { descriptor: outlook(), connected: false };
        let json = serde_json::to_value(&projected).unwrap();
        assert_eq!(json["id"], "outlook");
        assert_eq!(json["category"], "Calendar");
        assert_eq!(json["connected"], false);
    }

    #[test]
    fn test_connection_state_from_bool() {
        assert_eq!(ConnectionState::from(true), ConnectionState::Connected);
        assert_eq!(ConnectionState::from(false), ConnectionState::Disconnected);
        assert!(ConnectionState::Connected.is_connected());
        assert_eq!("Disconnected".parse::<ConnectionState>(), Ok(ConnectionState::Disconnected));
    }

    #[test]
    fn test_toggle_outcome_changed() {
        assert!(ToggleOutcome::Connected.changed());
        assert!(ToggleOutcome::Disconnected.changed());
        assert!(!ToggleOutcome::Ignored.changed());
        assert_eq!(ToggleOutcome::Ignored.to_string(), "ignored");
    }
}
