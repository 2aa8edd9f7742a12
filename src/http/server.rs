//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the frozen route table in an Axum router
//! - Wire up middleware (timeout, request ID, tracing)
//! - Serve until the shutdown signal fires

use std::future::Future;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RouterConfig;
use crate::http::handler::HttpRouter;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::service::RouterService;

/// Errors raised while serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP front end for a [`HttpRouter`].
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
    route_count: usize,
}

impl HttpServer {
    /// Freeze `routes` and build the middleware stack around them.
    pub fn new(config: RouterConfig, routes: HttpRouter) -> Self {
        let route_count = routes.route_count();
        let router = Self::build_router(&config, RouterService::new(routes));
        Self {
            router,
            config,
            route_count,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, service: RouterService) -> Router {
        Router::new()
            .fallback_service(service)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Serve connections from `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.route_count,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}
