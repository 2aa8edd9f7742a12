//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract routing-relevant information (method, decoded path)
//! - Deliver captured parameters to the handler
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Captures are appended to the query string and also stored as a
//!   `Params` extension
//! - The rewritten query keeps insertion order: original pairs, then captures

use axum::body::Body;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderName, HeaderValue, Request, Uri};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::routing::{Params, QueryParams};

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 for requests arriving without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Read the request ID header, if any.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Hand the captures to the handler.
///
/// Each `(name, value)` is appended to the URI query without touching
/// existing pairs, and the full list is inserted as a [`Params`] extension.
pub fn merge_captures(request: &mut Request<Body>, params: &Params) {
    if !params.is_empty() {
        let mut query = QueryParams::parse(request.uri().query().unwrap_or(""));
        params.merge_into(&mut query);

        match with_query(request.uri(), &query.encode()) {
            Some(uri) => *request.uri_mut() = uri,
            None => tracing::warn!(uri = %request.uri(), "Could not rewrite query with captures"),
        }
    }
    request.extensions_mut().insert(params.clone());
}

fn with_query(uri: &Uri, query: &str) -> Option<Uri> {
    let path_and_query: PathAndQuery = format!("{}?{}", uri.path(), query).parse().ok()?;
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    Uri::from_parts(parts).ok()
}
