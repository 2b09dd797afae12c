//! Test logging initialization
//!
//! One-time subscriber install used by both `#[cfg(test)]` modules (through a
//! `ctor` hook in the engine crate) and the integration test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and safe to call from many tests. The filter is taken from
/// `TEST_LOG`, then `RUST_LOG`, and falls back to `"warn"` so a normal test
/// run stays quiet.
///
/// ```bash
/// TEST_LOG=schnapsen_engine=debug cargo test -p schnapsen-engine
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
