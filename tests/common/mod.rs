//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use segment_router::config::RouterConfig;
use segment_router::http::{HttpRouter, HttpServer};
use segment_router::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start a server for `routes` on an ephemeral localhost port.
///
/// Returns the bound address and the coordinator that stops it.
pub async fn start_server(routes: HttpRouter) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = RouterConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, routes);
    let signal = shutdown.signaled();
    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Plain client without connection pooling or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
