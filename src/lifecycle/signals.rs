//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for ctrl-c (SIGINT)
//! - Translate it into a [`Shutdown`] trigger

use crate::lifecycle::Shutdown;

/// Trigger `shutdown` when ctrl-c is received.
pub async fn shutdown_on_ctrl_c(shutdown: Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c, shutting down"),
    }
    shutdown.trigger();
}
