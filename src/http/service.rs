//! Request dispatch.
//!
//! # Responsibilities
//! - Resolve method + decoded path against the frozen router
//! - Merge captures into the request, then invoke the handler
//! - Answer 404 for unknown paths and for unregistered methods alike
//!
//! # Design Decisions
//! - `RouterService` shares the router through an `Arc`, so registration is
//!   over before the first request is served
//! - Dispatch never fails at the service level (`Infallible`)

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::{self, BoxFuture};
use tower::Service;

use crate::http::handler::HttpRouter;
use crate::http::request::{merge_captures, request_id};
use crate::routing::segment::decode_path;

impl HttpRouter {
    /// Route one request and run its handler.
    pub fn serve(&self, mut request: Request<Body>) -> BoxFuture<'static, Response> {
        let method = request.method().clone();
        let path = decode_path(request.uri().path()).into_owned();

        match self.resolve(&method, &path) {
            Ok(matched) => {
                tracing::debug!(
                    request_id = %request_id(&request),
                    method = %method,
                    path = %path,
                    params = matched.params.len(),
                    "Dispatching request"
                );
                merge_captures(&mut request, &matched.params);
                (matched.handler)(request)
            }
            Err(err) => {
                tracing::debug!(
                    request_id = %request_id(&request),
                    outcome = err.kind(),
                    error = %err,
                    "No route matched"
                );
                Box::pin(future::ready(err.into_response()))
            }
        }
    }
}

/// `tower` service over a frozen [`HttpRouter`].
#[derive(Clone)]
pub struct RouterService {
    router: Arc<HttpRouter>,
}

impl RouterService {
    pub fn new(router: HttpRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    pub fn router(&self) -> &HttpRouter {
        &self.router
    }
}

impl From<HttpRouter> for RouterService {
    fn from(router: HttpRouter) -> Self {
        Self::new(router)
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let response = self.router.serve(request);
        Box::pin(async move { Ok(response.await) })
    }
}
