//! Configuration for graph construction.
//!
//! This module provides [`GraphConfig`], which controls the two policies that can be
//! layered on top of the basic [`add_child`](crate::DirectedGraph::add_child)
//! operation: whether parallel edges between the same pair of nodes are kept, and
//! whether edges that would close a directed cycle are accepted.
//!
//! The defaults describe a general directed multigraph: parallel edges and cycles
//! are both allowed.

use strum::{Display, EnumIter};

/// What [`add_child`](crate::DirectedGraph::add_child) does when the parent already
/// has an edge to the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ParallelEdges {
    /// Append another edge; the pair ends up connected more than once.
    #[default]
    Allow,
    /// Keep the existing edge and silently drop the new one.
    Ignore,
}

/// What [`add_child`](crate::DirectedGraph::add_child) does with an edge that would
/// close a directed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum CyclePolicy {
    /// Accept the edge.
    #[default]
    Allow,
    /// Refuse the edge with [`Error::CycleRejected`](crate::Error::CycleRejected).
    ///
    /// Self-loops count as cycles.
    Reject,
}

/// Configuration for a [`DirectedGraph`](crate::DirectedGraph).
///
/// # Examples
///
/// ```rust
/// use rootgraph::{CyclePolicy, DirectedGraph, GraphConfig};
///
/// let mut dag: DirectedGraph<&str> = DirectedGraph::with_config(GraphConfig::strict());
/// dag.add_child("a", "b", ())?;
/// assert!(dag.add_child("b", "a", ()).is_err());
/// assert_eq!(dag.config().cycles, CyclePolicy::Reject);
/// # Ok::<(), rootgraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Handling of repeated edges between the same parent and child (default: `Allow`).
    pub parallel_edges: ParallelEdges,

    /// Handling of edges that close a cycle (default: `Allow`).
    pub cycles: CyclePolicy,
}

impl GraphConfig {
    /// Creates the default configuration: parallel edges and cycles allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for a simple DAG: no parallel edges, no cycles.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            parallel_edges: ParallelEdges::Ignore,
            cycles: CyclePolicy::Reject,
        }
    }

    /// Returns true if any restriction is enabled.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.parallel_edges == ParallelEdges::Ignore || self.cycles == CyclePolicy::Reject
    }

    /// Sets the parallel edge policy.
    #[must_use]
    pub fn with_parallel_edges(mut self, policy: ParallelEdges) -> Self {
        self.parallel_edges = policy;
        self
    }

    /// Sets the cycle policy.
    #[must_use]
    pub fn with_cycles(mut self, policy: CyclePolicy) -> Self {
        self.cycles = policy;
        self
    }
}
