//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber once per process
//! - Honor `RUST_LOG`, falling back to the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `level` is used when `RUST_LOG` is unset or invalid, scoped to this crate
/// and `tower_http`. Calling this twice is harmless: the second call is
/// ignored.
pub fn init_logging(level: &str) {
    let fallback = format!("segment_router={level},tower_http={level}");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
