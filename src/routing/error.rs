//! Route resolution errors.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body sent for every unresolved request.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Why a request could not be routed.
///
/// Both variants reach the client as the same 404; the distinction only
/// exists for callers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No trie path consumes every segment of the request path.
    #[error("no route matches path {path}")]
    NoRouteMatch { path: String },

    /// The path matched a terminal node with no handler for the method.
    #[error("no {method} handler registered for path {path}")]
    NoHandlerForMethod { method: Method, path: String },
}

impl RouteError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::NoRouteMatch { .. } => "no_route",
            RouteError::NoHandlerForMethod { .. } => "no_method",
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}
