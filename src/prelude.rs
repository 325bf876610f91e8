//! # rootgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! traits of the rootgraph library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all rootgraph operations
pub use crate::Error;

/// The result type used throughout rootgraph
pub use crate::Result;

/// Policies applied by `add_child`
pub use crate::{CyclePolicy, GraphConfig, ParallelEdges};

// ================================================================================================
// Graph
// ================================================================================================

/// The keyed directed graph
pub use crate::graph::DirectedGraph;

/// Storage and handles, for algorithms written against the graph traits
pub use crate::graph::{NodeId, NodeStore};

/// Graph abstraction traits
pub use crate::graph::{GraphBase, Predecessors, RootedGraph, Successors};

// ================================================================================================
// Search
// ================================================================================================

/// Search visiting order, per-node status and visitor hooks
pub use crate::graph::{SearchHooks, SearchStatus, Traversal};
