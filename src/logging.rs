//! Tracing subscriber setup for hosts and tests

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warpbrush=info";

/// Install a formatting subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
