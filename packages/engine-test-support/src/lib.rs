//! Engine test support utilities
//!
//! Shared helpers for the engine's unit and integration tests. Currently this
//! is the one place where a `tracing` subscriber gets installed.

pub mod logging;
