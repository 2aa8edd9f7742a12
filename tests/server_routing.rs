//! End-to-end routing through the HTTP server.

use axum::body::Body;
use axum::http::{Method, Request};
use segment_router::http::{handler_fn, HttpRouter};
use segment_router::lifecycle::startup::build_routes;
use segment_router::config::RouteConfig;
use segment_router::routing::{Params, QueryParams};
use serde_json::json;

mod common;

fn echo(label: &'static str) -> segment_router::http::BoxHandler {
    handler_fn(move |req: Request<Body>| async move {
        format!("{label} {}", req.uri().query().unwrap_or(""))
    })
}

fn users_router() -> HttpRouter {
    HttpRouter::new()
        .route(Method::GET, "/users/:id", echo("by-id"))
        .route(Method::GET, "/users/me", echo("me"))
        .route(Method::DELETE, "/users/:id", echo("delete"))
        .route(Method::GET, "/", echo("root"))
}

#[tokio::test]
async fn test_users_example_over_http() {
    let (addr, shutdown) = common::start_server(users_router()).await;
    let client = common::client();
    let base = format!("http://{addr}");

    let res = client.get(format!("{base}/users/me")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "me ");

    let res = client.get(format!("{base}/users/42")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "by-id id=42");

    let res = client.post(format!("{base}/users/42")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "404 page not found\n");

    let res = client.delete(format!("{base}/users/42")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "delete id=42");

    shutdown.trigger();
}

#[tokio::test]
async fn test_query_values_are_kept() {
    let (addr, shutdown) = common::start_server(users_router()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/users/42?id=99&x=1"))
        .send()
        .await
        .unwrap();
    let text = res.text().await.unwrap();
    let query = QueryParams::parse(text.trim_start_matches("by-id "));
    assert_eq!(query.get_all("id").collect::<Vec<_>>(), vec!["99", "42"]);
    assert_eq!(query.get("x"), Some("1"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_normalized_paths_resolve_identically() {
    let (addr, shutdown) = common::start_server(users_router()).await;
    let client = common::client();

    for path in ["/", "//"] {
        let res = client.get(format!("http://{addr}{path}")).send().await.unwrap();
        assert_eq!(res.text().await.unwrap(), "root ", "path {path:?}");
    }
    for path in ["/users/me/", "//users//me"] {
        let res = client.get(format!("http://{addr}{path}")).send().await.unwrap();
        assert_eq!(res.text().await.unwrap(), "me ", "path {path:?}");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (addr, shutdown) = common::start_server(users_router()).await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/users/me")).send().await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    let res = client
        .get(format!("http://{addr}/users/me"))
        .header("x-request-id", "fixed-id")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "fixed-id");

    shutdown.trigger();
}

#[tokio::test]
async fn test_configured_routes() {
    let routes = build_routes(&[
        RouteConfig {
            method: "GET".into(),
            pattern: "/repos/:owner/:repo".into(),
            body: "repo".into(),
        },
        RouteConfig {
            method: "GET".into(),
            pattern: "/repos/rust-lang/:repo".into(),
            body: "official".into(),
        },
    ]);
    let (addr, shutdown) = common::start_server(routes).await;
    let client = common::client();

    let text = client
        .get(format!("http://{addr}/repos/rust-lang/cargo"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["body"], "official");
    assert_eq!(json["params"], json!([{ "name": "repo", "value": "cargo" }]));

    let text = client
        .get(format!("http://{addr}/repos/tokio-rs/axum"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["body"], "repo");
    assert_eq!(
        json["params"],
        json!([
            { "name": "owner", "value": "tokio-rs" },
            { "name": "repo", "value": "axum" },
        ])
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_params_extension_over_http() {
    let router = HttpRouter::new().route(
        Method::GET,
        "/orgs/:org/teams/:team",
        handler_fn(|req: Request<Body>| async move {
            let params = req.extensions().get::<Params>().cloned().unwrap_or_default();
            params
                .iter()
                .map(|(n, v)| format!("{n}={v}"))
                .collect::<Vec<_>>()
                .join(";")
        }),
    );
    let (addr, shutdown) = common::start_server(router).await;

    let text = common::client()
        .get(format!("http://{addr}/orgs/acme/teams/core"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "org=acme;team=core");

    shutdown.trigger();
}
