//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, capture merging)
//!     → service.rs (route lookup, 404 or handler)
//!     → handler.rs (boxed async handler)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod server;
pub mod service;

pub use handler::{handler_fn, BoxHandler, HttpRouter};
pub use request::{merge_captures, UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
pub use service::RouterService;
