//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn configured routes into a populated [`HttpRouter`]
//! - Bind the listener and hand everything to the server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when routes are registered)

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Json;
use serde::Serialize;
use tokio::net::TcpListener;

use crate::config::{RouteConfig, RouterConfig};
use crate::http::{handler_fn, HttpRouter, HttpServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::routing::Params;

/// Response of a configured static route.
#[derive(Debug, Serialize)]
pub struct StaticReply {
    pub body: String,
    /// Captures in pattern order; repeated names keep every value.
    pub params: Vec<ParamEntry>,
}

#[derive(Debug, Serialize)]
pub struct ParamEntry {
    pub name: String,
    pub value: String,
}

/// Register every configured route.
///
/// Routes with an unparseable method are skipped with a warning; validated
/// configs never contain them.
pub fn build_routes(routes: &[RouteConfig]) -> HttpRouter {
    let mut router = HttpRouter::new();
    for route in routes {
        let method = match Method::from_bytes(route.method.as_bytes()) {
            Ok(method) => method,
            Err(e) => {
                tracing::warn!(method = %route.method, error = %e, "Skipping route with invalid method");
                continue;
            }
        };
        let body = route.body.clone();
        router.add_route(
            method,
            &route.pattern,
            handler_fn(move |req: Request<Body>| {
                let body = body.clone();
                async move { Json(static_reply(body, req.extensions().get::<Params>())) }
            }),
        );
    }
    router
}

fn static_reply(body: String, params: Option<&Params>) -> StaticReply {
    let params = params
        .map(|p| {
            p.iter()
                .map(|(name, value)| ParamEntry {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })
                .collect()
        })
        .unwrap_or_default();
    StaticReply { body, params }
}

/// Build the server from `config` and run it on `listener`.
pub async fn start(
    config: RouterConfig,
    listener: TcpListener,
    shutdown: &Shutdown,
) -> Result<(), ServerError> {
    let routes = build_routes(&config.routes);
    tracing::info!(routes = routes.route_count(), "Routes registered");

    HttpServer::new(config, routes)
        .run(listener, shutdown.signaled())
        .await
}
