//! Shared test utilities for the randnet workspace.
//!
//! - [`tracing`](crate::tracing) captures spans and events so tests can assert on the
//!   structured diagnostics emitted by `randnet-core`.
//! - [`property_test_profile`] reads proptest tuning from the environment so
//!   every property suite honours the same overrides.

pub mod property_test_profile;
pub mod tracing;
