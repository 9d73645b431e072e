//! Test logging
//!
//! Installs a `tracing` subscriber once per process. The filter comes from
//! `RUST_LOG`, falling back to `warn`.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; later calls are no-ops
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
