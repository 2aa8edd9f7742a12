//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     (method, pattern, handler)
//!     → segment.rs (split pattern, classify literal / :capture)
//!     → node.rs (walk the trie arena, creating nodes lazily)
//!     → terminal node stores handler[method] + parameter names
//!
//! Incoming request (method, path):
//!     → segment.rs (split path)
//!     → router.rs (backtracking search, literal before capture per level)
//!     → params.rs (pair names with captured values)
//!     → Return: handler + Params, or RouteError (404)
//! ```
//!
//! # Design Decisions
//! - One segment per capture, no catch-all
//! - Trie is append-only and frozen once shared
//! - Deterministic: same input always matches same route

pub mod error;
pub mod node;
pub mod params;
pub mod router;
pub mod segment;

pub use error::RouteError;
pub use params::{Params, QueryParams, QueryStore};
pub use router::{RouteMatch, Router};
