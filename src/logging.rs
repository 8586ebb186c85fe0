//! Tracing setup
//!
//! Console subscriber with env-filter support, shared by the CLI binary
//! and any embedder that has no subscriber of its own.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Safe to call more than once;
/// later calls are no-ops.
pub fn init(log_level: &str) {
    // Build filter from RUST_LOG env var or use provided log level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
