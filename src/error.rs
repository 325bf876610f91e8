use thiserror::Error;

use crate::graph::NodeId;

/// Builds an [`Error::NotFound`] from a format string.
///
/// Keys are generic and need not implement `Debug`, so messages name nodes by
/// their [`NodeId`] and the error type itself stays free of type parameters.
macro_rules! not_found {
    ($msg:expr) => {
        crate::Error::NotFound($msg.to_string())
    };

    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::NotFound(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which covers all errors this library can return.
///
/// Store-level queries such as [`children`](crate::DirectedGraph::children) or
/// [`has_node`](crate::DirectedGraph::has_node) never fail: an unknown key simply
/// yields an empty result. Errors are reserved for operations that have no sensible
/// silent fallback.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::NotFound`] - A required node or parent/child relationship is absent
///
/// ## Cursor Errors
/// - [`Error::NoSelection`] - A cursor-relative operation was used without a selection
///
/// ## Policy Errors
/// - [`Error::CycleRejected`] - An edge would close a cycle under [`CyclePolicy::Reject`](crate::CyclePolicy::Reject)
///
/// ## Traversal Errors
/// - [`Error::Hook`] - A search hook aborted the traversal
///
/// # Examples
///
/// ```rust
/// use rootgraph::{DirectedGraph, Error};
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
/// graph.add_child(0, 1, ())?;
///
/// match graph.edge_between(&0, &2) {
///     Err(Error::NotFound(what)) => println!("missing: {what}"),
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), rootgraph::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required node, or a required edge between two nodes, does not exist.
    ///
    /// Raised by [`edge_between`](crate::DirectedGraph::edge_between),
    /// [`find_child`](crate::DirectedGraph::find_child) and
    /// [`select`](crate::DirectedGraph::select). Callers can avoid it by checking
    /// [`has_child`](crate::DirectedGraph::has_child) or
    /// [`has_node`](crate::DirectedGraph::has_node) first.
    #[error("Not found - {0}")]
    NotFound(String),

    /// A cursor-relative operation was attempted while no node is selected.
    ///
    /// Raised by [`add_child_to_selected`](crate::DirectedGraph::add_child_to_selected),
    /// [`selected_node`](crate::DirectedGraph::selected_node) and by
    /// [`append`](crate::DirectedGraph::append) on a non-empty graph. This indicates
    /// a logic error in the caller.
    #[error("No node is selected - {0}")]
    NoSelection(&'static str),

    /// Adding the requested edge would have closed a directed cycle.
    ///
    /// Only raised when the graph is configured with
    /// [`CyclePolicy::Reject`](crate::CyclePolicy::Reject). The graph is left unchanged.
    /// Endpoints are given as handles, resolvable through
    /// [`NodeStore::key`](crate::graph::NodeStore::key); `None` marks a node that
    /// does not exist yet, as in a self-loop on a new key.
    #[error("Edge {} -> {} would close a cycle", endpoint(.parent), endpoint(.child))]
    CycleRejected {
        /// Handle of the would-be parent
        parent: Option<NodeId>,
        /// Handle of the would-be child
        child: Option<NodeId>,
    },

    /// A search hook aborted the traversal.
    ///
    /// Hooks return this to stop a search early with a reason; the search returns
    /// immediately and any remaining frontier entries are discarded.
    #[error("Search aborted by hook - {0}")]
    Hook(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

fn endpoint(node: &Option<NodeId>) -> String {
    node.map_or_else(|| "new node".to_string(), |node| node.to_string())
}
