//! Segment-trie HTTP router.
//!
//! Routes are `/`-separated patterns whose segments are either literals or
//! `:name` captures. Lookup prefers a literal child over the capture child at
//! every level and backtracks when a literal subtree cannot consume the
//! rest of the path.
//!
//! ```
//! use axum::http::Method;
//! use segment_router::routing::Router;
//!
//! let router = Router::new()
//!     .route(Method::GET, "/users/:id", "by-id")
//!     .route(Method::GET, "/users/me", "me");
//!
//! assert_eq!(*router.resolve(&Method::GET, "/users/me").unwrap().handler, "me");
//!
//! let matched = router.resolve(&Method::GET, "/users/42").unwrap();
//! assert_eq!(*matched.handler, "by-id");
//! assert_eq!(matched.params.get("id"), Some("42"));
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::{handler_fn, HttpRouter, HttpServer, RouterService};
pub use lifecycle::Shutdown;
pub use routing::{Params, RouteError, Router};
