//! Node handle implementation for the node store.
//!
//! This module provides the [`NodeId`] type, a strongly-typed handle for a node record
//! inside a [`NodeStore`](crate::graph::NodeStore) arena. Callers address nodes by
//! their own key type; `NodeId` is what the store, the search engine and the path
//! algorithms use underneath.

use std::fmt;

/// A strongly-typed handle for a node record within a node store.
///
/// `NodeId` wraps the `usize` slot index of the record in the store's arena. Handles
/// stay valid for as long as the node exists; once the node is removed its slot is
/// recycled and the same index may later refer to a different key.
///
/// # Usage
///
/// Handles are produced by [`NodeStore::insert`](crate::graph::NodeStore::insert) and
/// [`NodeStore::id_of`](crate::graph::NodeStore::id_of). They are used to:
///
/// - Walk adjacency without hashing keys
/// - Index per-search status tables
/// - Record paths before mapping them back to keys
///
/// # Examples
///
/// ```rust
/// use rootgraph::graph::{NodeId, NodeStore};
///
/// let mut store: NodeStore<&str, (), ()> = NodeStore::new();
/// let (a, _) = store.insert("A", ());
/// let (b, _) = store.insert("B", ());
///
/// assert_ne!(a, b);
/// assert_eq!(store.id_of(&"A"), Some(a));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw slot index.
    ///
    /// Primarily intended for internal use and testing; a hand-made handle is not
    /// guaranteed to refer to a live node.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
