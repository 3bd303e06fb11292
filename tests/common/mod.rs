//! Shared test utilities

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber so the engine's degradation warnings show
/// up in test output (set RUST_LOG to see them). Safe to call from every
/// test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
