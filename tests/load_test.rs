//! Concurrent dispatch against a shared, frozen router.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Method, Request};
use segment_router::http::{handler_fn, HttpRouter};
use segment_router::routing::Params;

mod common;

#[tokio::test]
async fn test_concurrent_dispatch() {
    let mut router = HttpRouter::new();
    for section in ["a", "b", "c", "d"] {
        router.add_route(
            Method::GET,
            &format!("/{section}/:id"),
            handler_fn(|req: Request<Body>| async move {
                req.extensions()
                    .get::<Params>()
                    .and_then(|p| p.get("id"))
                    .unwrap_or_default()
                    .to_owned()
            }),
        );
    }
    let (addr, shutdown) = common::start_server(router).await;

    let concurrency = 20;
    let requests_per_task = 25;
    let client = common::client();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let mut failures = 0;
            for i in 0..requests_per_task {
                let section = ["a", "b", "c", "d"][i % 4];
                let id = format!("{task}-{i}");
                match client.get(format!("http://{addr}/{section}/{id}")).send().await {
                    Ok(res) if res.status() == 200 => {
                        if res.text().await.unwrap_or_default() != id {
                            failures += 1;
                        }
                    }
                    _ => failures += 1,
                }
            }
            failures
        }));
    }

    let mut failures = 0;
    for task in tasks {
        failures += task.await.unwrap();
    }
    let elapsed = start.elapsed();

    println!(
        "{} requests in {:?}",
        concurrency * requests_per_task,
        elapsed
    );
    assert_eq!(failures, 0);
    assert!(elapsed < Duration::from_secs(30));

    shutdown.trigger();
}
