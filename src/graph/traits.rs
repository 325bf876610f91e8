//! Trait definitions for graph abstractions.
//!
//! The search engine and the path algorithms are written against these traits
//! rather than against [`NodeStore`](crate::graph::NodeStore) directly, so that
//! they only see what they need: handles, keys and adjacency.
//!
//! - [`GraphBase`] - Core properties: node count, handle bound, key lookups
//! - [`Successors`] - Forward edge traversal (child edges)
//! - [`Predecessors`] - Backward edge traversal (parent edges)
//! - [`RootedGraph`] - Graphs that can enumerate their parentless nodes
//!
//! All adjacency queries return iterators rather than collections.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Caller-facing node identity.
    type Key;

    /// Payload attached to each edge.
    type Edge;

    /// Returns the number of live nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an exclusive upper bound for the index of any live [`NodeId`].
    ///
    /// Algorithms size their per-node tables with this value. It may be larger than
    /// [`node_count`](GraphBase::node_count) when slots have been freed.
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live node handles in slot order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns the key stored for `node`, or `None` for a dead handle.
    fn key(&self, node: NodeId) -> Option<&Self::Key>;

    /// Returns the handle for `key`, or `None` if the key is not present.
    fn node_id(&self, key: &Self::Key) -> Option<NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns the child edges of `node` in insertion order.
    ///
    /// Each item is the child handle together with the payload of the connecting
    /// edge. Parallel edges are yielded once per edge. A dead handle yields nothing.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &Self::Edge)>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns the parent edges of `node` in insertion order.
    ///
    /// Each item is the parent handle together with the payload of the connecting
    /// edge. A dead handle yields nothing.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &Self::Edge)>;
}

/// Trait for graphs that track their root nodes.
///
/// A root is a node without parents. Unlike a control flow graph with a single
/// entry, a general directed graph can have any number of roots, including none
/// when every node sits on a cycle.
pub trait RootedGraph: Successors {
    /// Returns the root handles in root-set order.
    fn roots(&self) -> impl Iterator<Item = NodeId>;
}
