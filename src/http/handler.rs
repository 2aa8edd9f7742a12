//! Type-erased request handlers.

use std::future::Future;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

use crate::routing::Router;

/// A handler stored in the trie.
pub type BoxHandler = Box<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Router over HTTP handlers.
pub type HttpRouter = Router<BoxHandler>;

/// Wrap an async function as a [`BoxHandler`].
///
/// ```
/// use axum::http::Method;
/// use segment_router::http::{handler_fn, HttpRouter};
///
/// let mut router = HttpRouter::new();
/// router.add_route(Method::GET, "/health", handler_fn(|_req| async { "ok" }));
/// ```
pub fn handler_fn<F, Fut, R>(f: F) -> BoxHandler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Box::new(move |request| {
        let fut = f(request);
        Box::pin(async move { fut.await.into_response() })
    })
}
