//! Generic keyed directed graph.
//!
//! This module provides the graph itself and the layers it is built from:
//!
//! - **Store**: [`NodeStore`] keeps node records in an arena addressed by [`NodeId`]
//!   and maintains child and parent adjacency plus the root set
//! - **Search**: [`search`] runs depth-first or breadth-first traversals with caller
//!   hooks over anything implementing the [`traits`]
//! - **Façade**: [`DirectedGraph`] addresses nodes by caller keys, adds the selection
//!   cursor, the mutation operations and the configured policies
//!
//! # Design Principles
//!
//! ## Keys Outside, Handles Inside
//!
//! Callers only ever see their own key type. Internally every adjacency entry is a
//! [`NodeId`], so traversals index plain vectors instead of hashing keys.
//!
//! ## Both Directions Indexed
//!
//! A node may have several parents. Parent lists are stored next to child lists,
//! which makes removal, root promotion and [`pluck`](DirectedGraph::pluck) local
//! operations.
//!
//! # Usage Examples
//!
//! ```rust
//! use rootgraph::graph::{DirectedGraph, Traversal};
//!
//! let mut graph: DirectedGraph<&str, (), &str> = DirectedGraph::new();
//! graph.add_child("A", "B", "A->B")?;
//! graph.add_child("A", "C", "A->C")?;
//! graph.add_child("B", "D", "B->D")?;
//! graph.add_child("C", "D", "C->D")?;
//!
//! assert_eq!(graph.size(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert!(graph.search_with(Traversal::BreadthFirst, &"A", Some(&"D"), &mut ())?);
//!
//! graph.pluck(&"B");
//! assert_eq!(graph.children(&"A"), vec![("C", "A->C"), ("D", "A->B")]);
//! # Ok::<(), rootgraph::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their generic
//! parameters do.

mod directed;
mod mutation;
mod node;
mod paths;
mod render;
mod store;

pub mod search;
pub mod traits;

pub use directed::{DirectedGraph, Nodes};
pub use node::NodeId;
pub use paths::{has_cycle, shortest_path};
pub use render::escape_dot;
pub use search::{SearchHooks, SearchStatus, Traversal};
pub use store::NodeStore;
pub use traits::{GraphBase, Predecessors, RootedGraph, Successors};
