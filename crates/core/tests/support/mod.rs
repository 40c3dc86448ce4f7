//! Shared test helpers for `cadence-core` integration tests.

pub mod catalog;
