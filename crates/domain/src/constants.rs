//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

/// Integration ids connected when a service starts with the default seed.
pub const DEFAULT_SEED_CONNECTIONS: &[&str] = &["google-calendar", "zoom"];

/// Log filter used when neither config nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Built-in catalog categories
/// Calendar providers.
pub const CATEGORY_CALENDAR: &str = "Calendar";
/// Meeting and call tools.
pub const CATEGORY_VIDEO_CONFERENCING: &str = "Video Conferencing";
/// Chat and team messaging.
pub const CATEGORY_MESSAGING: &str = "Messaging";
/// Workflow automation platforms.
pub const CATEGORY_AUTOMATION: &str = "Automation";
