//! Observability infrastructure
//!
//! Logging is structured `tracing` output. Library code only emits events;
//! installing a subscriber is left to the binary or test harness via
//! [`logging::init_logging`].

pub mod logging;

pub use logging::init_logging;
