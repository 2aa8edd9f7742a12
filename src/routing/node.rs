//! Trie storage.
//!
//! Nodes live in a flat arena owned by [`Trie`] and refer to each other by
//! [`NodeId`]. The arena only grows: nodes are created lazily on first
//! registration of their position and never removed.

use std::collections::HashMap;

use axum::http::Method;

/// Index of a node inside its [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: NodeId = NodeId(0);
}

/// Key of an edge leaving a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKey<'a> {
    Literal(&'a str),
    /// The single capture slot of a node.
    Capture,
}

/// One position in the trie.
#[derive(Debug)]
pub struct Node<H> {
    literals: HashMap<String, NodeId>,
    capture: Option<NodeId>,
    /// Capture names along the root-to-here path. Only set on terminal nodes.
    param_names: Vec<String>,
    handlers: HashMap<Method, H>,
}

impl<H> Node<H> {
    fn new() -> Self {
        Self {
            literals: HashMap::new(),
            capture: None,
            param_names: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    pub fn child(&self, key: ChildKey<'_>) -> Option<NodeId> {
        match key {
            ChildKey::Literal(segment) => self.literals.get(segment).copied(),
            ChildKey::Capture => self.capture,
        }
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn handler(&self, method: &Method) -> Option<&H> {
        self.handlers.get(method)
    }

    /// Methods registered on this node, in no particular order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.handlers.keys()
    }

    /// A terminal node owns at least one handler.
    pub fn is_terminal(&self) -> bool {
        !self.handlers.is_empty()
    }
}

/// Arena of nodes rooted at [`NodeId::ROOT`].
#[derive(Debug)]
pub struct Trie<H> {
    nodes: Vec<Node<H>>,
}

impl<H> Trie<H> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
        }
    }

    pub fn node(&self, id: NodeId) -> &Node<H> {
        &self.nodes[id.0]
    }

    /// Follow the edge `key` out of `parent`, creating the child if missing.
    pub fn child_or_insert(&mut self, parent: NodeId, key: ChildKey<'_>) -> NodeId {
        if let Some(existing) = self.nodes[parent.0].child(key) {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new());

        let parent = &mut self.nodes[parent.0];
        match key {
            ChildKey::Literal(segment) => {
                parent.literals.insert(segment.to_owned(), id);
            }
            ChildKey::Capture => parent.capture = Some(id),
        }
        id
    }

    /// Store `handler` for `method` on a terminal node.
    ///
    /// Returns the handler it replaced, if any. `param_names` overwrites
    /// whatever the node held before.
    pub fn set_handler(
        &mut self,
        id: NodeId,
        method: Method,
        handler: H,
        param_names: Vec<String>,
    ) -> Option<H> {
        let node = &mut self.nodes[id.0];
        node.param_names = param_names;
        node.handlers.insert(method, handler)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<H>> {
        self.nodes.iter()
    }
}

impl<H> Default for Trie<H> {
    fn default() -> Self {
        Self::new()
    }
}
