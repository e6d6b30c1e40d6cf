//! Tracing/logging setup shared by stockring binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Logs go to stderr so binaries can keep stdout for their own output.
/// Filtering is driven by `RUST_LOG` and defaults to `info`. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
