//! Shared setup for the workspace acceptance tests.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Installs a tracing subscriber that writes through the test harness.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=kata_arrays=trace,kata_strings=trace cargo test -p integration-tests
/// ```
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be global, that's fine.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer().compact())
            .try_init();
    });
}
