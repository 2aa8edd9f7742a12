//! Route registration and lookup.
//!
//! # Responsibilities
//! - Build the segment trie from `(method, pattern, handler)` registrations
//! - Resolve a request path to a terminal node by backtracking search
//! - Pair the node's parameter names with the captured values
//!
//! # Design Decisions
//! - Registration needs `&mut self`, lookup only `&self`: once the router is
//!   shared behind an `Arc` it is frozen
//! - At every level a literal child is tried before the capture child, and a
//!   failing literal subtree falls back to the capture at that same level
//! - Path mismatch and method mismatch are separate errors that render the
//!   same 404

use axum::http::Method;

use crate::observability::metrics;
use crate::routing::error::RouteError;
use crate::routing::node::{ChildKey, NodeId, Trie};
use crate::routing::params::{Params, QueryStore};
use crate::routing::segment::{split_path, split_pattern, PatternSegment};

/// A successful resolution.
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    pub handler: &'r H,
    pub params: Params,
}

/// Segment-trie router, generic over the handler type.
#[derive(Debug)]
pub struct Router<H> {
    trie: Trie<H>,
}

impl<H> Router<H> {
    /// Create a router with no routes.
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Register `handler` for `method` requests matching `pattern`.
    ///
    /// Segments starting with `:` capture one request segment under the name
    /// that follows the colon. Registering the same method and pattern again
    /// replaces the earlier handler.
    pub fn add_route(&mut self, method: Method, pattern: &str, handler: H) {
        let mut current = NodeId::ROOT;
        let mut param_names = Vec::new();

        for segment in split_pattern(pattern) {
            let key = match segment {
                PatternSegment::Literal(text) => ChildKey::Literal(text),
                PatternSegment::Capture(name) => {
                    param_names.push(name.to_owned());
                    ChildKey::Capture
                }
            };
            current = self.trie.child_or_insert(current, key);
        }

        tracing::debug!(
            method = %method,
            pattern = %pattern,
            params = ?param_names,
            "Route registered"
        );

        let replaced = self
            .trie
            .set_handler(current, method.clone(), handler, param_names);
        if replaced.is_some() {
            tracing::debug!(method = %method, pattern = %pattern, "Replaced existing handler");
        }
        metrics::record_route_registered();
    }

    /// Builder form of [`Router::add_route`].
    pub fn route(mut self, method: Method, pattern: &str, handler: H) -> Self {
        self.add_route(method, pattern, handler);
        self
    }

    /// Find the handler and captures for a request.
    ///
    /// `path` is matched as given; decoding is the caller's job.
    pub fn resolve(&self, method: &Method, path: &str) -> Result<RouteMatch<'_, H>, RouteError> {
        let result = self.resolve_inner(method, path);
        metrics::record_resolution(method, result.as_ref().err());
        result
    }

    fn resolve_inner(&self, method: &Method, path: &str) -> Result<RouteMatch<'_, H>, RouteError> {
        let segments = split_path(path);

        let (id, mut values) = self
            .find_route(NodeId::ROOT, &segments, 0)
            .ok_or_else(|| RouteError::NoRouteMatch {
                path: path.to_owned(),
            })?;
        // Captures were pushed while unwinding, innermost first.
        values.reverse();

        let node = self.trie.node(id);
        let handler = node
            .handler(method)
            .ok_or_else(|| RouteError::NoHandlerForMethod {
                method: method.clone(),
                path: path.to_owned(),
            })?;

        debug_assert_eq!(node.param_names().len(), values.len());
        let mut params = Params::new();
        for (name, value) in node.param_names().iter().zip(values) {
            params.push(name.as_str(), value);
        }

        tracing::trace!(method = %method, path = %path, params = ?params, "Route resolved");
        Ok(RouteMatch { handler, params })
    }

    /// Resolve, then append the captures to `query` and hand back the handler.
    pub fn dispatch<Q>(&self, method: &Method, path: &str, query: &mut Q) -> Result<&H, RouteError>
    where
        Q: QueryStore + ?Sized,
    {
        let matched = self.resolve(method, path)?;
        matched.params.merge_into(query);
        Ok(matched.handler)
    }

    /// Depth-first search for the node consuming `segments[depth..]`.
    fn find_route<'p>(
        &self,
        id: NodeId,
        segments: &[&'p str],
        depth: usize,
    ) -> Option<(NodeId, Vec<&'p str>)> {
        let Some(&dir) = segments.get(depth) else {
            return Some((id, Vec::new()));
        };
        let node = self.trie.node(id);

        if let Some(next) = node.child(ChildKey::Literal(dir)) {
            if let Some(found) = self.find_route(next, segments, depth + 1) {
                return Some(found);
            }
        }

        let next = node.child(ChildKey::Capture)?;
        let (found, mut values) = self.find_route(next, segments, depth + 1)?;
        values.push(dir);
        Some((found, values))
    }

    /// Number of registered `(method, pattern)` routes.
    pub fn route_count(&self) -> usize {
        self.trie.nodes().map(|node| node.methods().count()).sum()
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
