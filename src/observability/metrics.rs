//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): resolutions by method and outcome
//!   (`matched`, `no_route`, `no_method`). Extension methods share the
//!   `other` method label so clients cannot mint new series.
//! - `router_routes_registered_total` (counter): `add_route` calls
//!
//! # Design Decisions
//! - Updates go through the `metrics` facade and cost nothing without a
//!   recorder
//! - The Prometheus exporter is only installed by the binary

use std::net::SocketAddr;

use axum::http::Method;
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::RouteError;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one resolution attempt.
pub fn record_resolution(method: &Method, error: Option<&RouteError>) {
    let outcome = error.map_or("matched", RouteError::kind);
    metrics::counter!(
        "router_requests_total",
        "method" => method_label(method),
        "outcome" => outcome
    )
    .increment(1);
}

const STANDARD_METHODS: [&str; 9] = [
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

/// Bounded label for `method`.
fn method_label(method: &Method) -> &'static str {
    STANDARD_METHODS
        .iter()
        .copied()
        .find(|standard| *standard == method.as_str())
        .unwrap_or("other")
}

pub fn record_route_registered() {
    metrics::counter!("router_routes_registered_total").increment(1);
}
