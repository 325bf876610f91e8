//! Generic breadth-first and depth-first search.
//!
//! Every traversal in this crate is built from the one primitive in this module,
//! [`search`]. It is parameterized by:
//!
//! - a [`Frontier`], which decides the visiting order: [`DepthFirst`] is a stack
//!   (the last discovered child is expanded next), [`BreadthFirst`] is a queue
//!   (the first discovered child is expanded next)
//! - a [`SearchHooks`] visitor with three hook points
//! - an optional target; with a target the search stops as soon as the target is
//!   popped from the frontier, without one it visits everything reachable
//!
//! # Node States
//!
//! During one call every node moves through `Unvisited → Touched → Searched`
//! ([`SearchStatus`]). The status table lives only for the duration of the call.
//!
//! # Hook Order
//!
//! For each node popped from the frontier:
//!
//! 1. the node is marked touched and [`on_touched`](SearchHooks::on_touched) runs
//! 2. for every child edge, [`on_child`](SearchHooks::on_child) runs, whether or not
//!    the child was already visited; unvisited children are pushed
//! 3. the node is marked searched and [`on_searched`](SearchHooks::on_searched) runs
//!
//! A hook returning an error stops the search immediately and the error is
//! returned to the caller. Cycles cannot cause non-termination: a node is expanded
//! at most once per call.

use std::collections::VecDeque;

use strum::{Display, EnumIter};

use crate::{
    graph::{
        traits::{RootedGraph, Successors},
        NodeId,
    },
    Result,
};

/// Visiting order of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Traversal {
    /// Stack frontier: the most recently discovered node is expanded next.
    DepthFirst,
    /// Queue frontier: the earliest discovered node is expanded next.
    BreadthFirst,
}

/// Per-call state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum SearchStatus {
    /// Not yet popped from the frontier.
    #[default]
    Unvisited,
    /// Popped; its children are being examined.
    Touched,
    /// All children have been examined.
    Searched,
}

/// A container of pending nodes with a fixed push/pop discipline.
pub trait Frontier<T>: Default {
    /// Adds an item.
    fn push(&mut self, item: T);

    /// Removes the next item to expand.
    fn pop(&mut self) -> Option<T>;

    /// Returns true if nothing is pending.
    fn is_empty(&self) -> bool;
}

/// Last in, first out frontier.
#[derive(Debug, Clone)]
pub struct DepthFirst<T>(Vec<T>);

impl<T> Default for DepthFirst<T> {
    fn default() -> Self {
        DepthFirst(Vec::new())
    }
}

impl<T> Frontier<T> for DepthFirst<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First in, first out frontier.
#[derive(Debug, Clone)]
pub struct BreadthFirst<T>(VecDeque<T>);

impl<T> Default for BreadthFirst<T> {
    fn default() -> Self {
        BreadthFirst(VecDeque::new())
    }
}

impl<T> Frontier<T> for BreadthFirst<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Caller hooks invoked during a search.
///
/// Every hook receives the node key together with the edge through which the node
/// was reached. The seed of a search is reached through `E::default()`. All hooks
/// default to doing nothing; `()` is the visitor that overrides none of them.
///
/// Hooks only get shared access to keys and edges, and the search holds a shared
/// borrow of the graph, so a hook cannot mutate the graph being searched.
///
/// # Examples
///
/// ```rust
/// use rootgraph::{DirectedGraph, Result, SearchHooks};
///
/// #[derive(Default)]
/// struct Order(Vec<u32>);
///
/// impl SearchHooks<u32, ()> for Order {
///     fn on_touched(&mut self, node: &u32, _edge: &()) -> Result<()> {
///         self.0.push(*node);
///         Ok(())
///     }
/// }
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::with_root(0);
/// graph.add_child(0, 1, ())?;
/// graph.add_child(0, 2, ())?;
///
/// let mut order = Order::default();
/// graph.seeded_breadth_search(&0, &mut order)?;
/// assert_eq!(order.0, vec![0, 1, 2]);
/// # Ok::<(), rootgraph::Error>(())
/// ```
pub trait SearchHooks<K, E> {
    /// Called when `node` is popped, before its children are examined.
    fn on_touched(&mut self, _node: &K, _edge: &E) -> Result<()> {
        Ok(())
    }

    /// Called for every child edge of `parent`, including already visited children.
    fn on_child(&mut self, _child: (&K, &E), _parent: (&K, &E)) -> Result<()> {
        Ok(())
    }

    /// Called once all children of `node` have been examined.
    fn on_searched(&mut self, _node: &K, _edge: &E) -> Result<()> {
        Ok(())
    }
}

impl<K, E> SearchHooks<K, E> for () {}

/// Searches `graph` from `seed` using the frontier `F`.
///
/// With `Some(target)` the search returns `Ok(true)` the moment `target` is popped;
/// the target itself is not touched. Otherwise, and whenever the frontier runs dry,
/// it returns `Ok(false)`. A dead `seed` handle returns `Ok(false)` without calling
/// any hook.
///
/// A node pushed several times before being popped (it was discovered through more
/// than one edge) is expanded only the first time.
///
/// # Errors
///
/// Returns the first error produced by a hook.
///
/// # Complexity
///
/// - Time: O(V + E) over the reachable part of the graph
/// - Space: O(V) for the status table and O(E) for the frontier
pub fn search<'g, G, F, H>(
    graph: &'g G,
    seed: NodeId,
    target: Option<NodeId>,
    hooks: &mut H,
) -> Result<bool>
where
    G: Successors,
    G::Edge: Default,
    F: Frontier<(NodeId, Option<&'g G::Edge>)>,
    H: SearchHooks<G::Key, G::Edge>,
{
    if graph.key(seed).is_none() {
        return Ok(false);
    }

    let seed_edge = G::Edge::default();
    let mut status = vec![SearchStatus::Unvisited; graph.node_bound()];
    let mut frontier = F::default();
    frontier.push((seed, None));

    while let Some((current, via)) = frontier.pop() {
        if target == Some(current) {
            return Ok(true);
        }
        if status[current.index()] != SearchStatus::Unvisited {
            continue;
        }
        let Some(key) = graph.key(current) else {
            continue;
        };
        let edge = match via {
            Some(edge) => edge,
            None => &seed_edge,
        };

        status[current.index()] = SearchStatus::Touched;
        log::trace!("search touched {current}");
        hooks.on_touched(key, edge)?;

        for (child, child_edge) in graph.successors(current) {
            if let Some(child_key) = graph.key(child) {
                hooks.on_child((child_key, child_edge), (key, edge))?;
            }
            if status[child.index()] == SearchStatus::Unvisited {
                frontier.push((child, Some(child_edge)));
            }
        }

        status[current.index()] = SearchStatus::Searched;
        hooks.on_searched(key, edge)?;
    }

    Ok(false)
}

/// Runs [`search`] with the frontier selected by `order`.
///
/// # Errors
///
/// Returns the first error produced by a hook.
pub fn search_with<G, H>(
    graph: &G,
    order: Traversal,
    seed: NodeId,
    target: Option<NodeId>,
    hooks: &mut H,
) -> Result<bool>
where
    G: Successors,
    G::Edge: Default,
    H: SearchHooks<G::Key, G::Edge>,
{
    match order {
        Traversal::DepthFirst => search::<G, DepthFirst<_>, H>(graph, seed, target, hooks),
        Traversal::BreadthFirst => search::<G, BreadthFirst<_>, H>(graph, seed, target, hooks),
    }
}

/// Runs [`search_with`] once per root, in root-set order.
///
/// With a target, stops at the first root whose search finds it. The status table
/// is not shared between roots: a node reachable from two roots is visited once
/// under each of them.
///
/// # Errors
///
/// Returns the first error produced by a hook.
pub fn search_from_roots<G, H>(
    graph: &G,
    order: Traversal,
    target: Option<NodeId>,
    hooks: &mut H,
) -> Result<bool>
where
    G: RootedGraph,
    G::Edge: Default,
    H: SearchHooks<G::Key, G::Edge>,
{
    let roots: Vec<NodeId> = graph.roots().collect();
    for root in roots {
        if search_with(graph, order, root, target, hooks)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Collects the nodes reachable from `seed` in the order a search would touch them.
///
/// This is the hook-free walk: it follows the same frontier discipline as
/// [`search`] but only records handles, so it cannot fail. A dead `seed` yields
/// an empty list.
pub fn reachable<G>(graph: &G, order: Traversal, seed: NodeId) -> Vec<NodeId>
where
    G: Successors,
{
    reachable_from(graph, order, std::iter::once(seed))
}

/// Collects the nodes reachable from any of `seeds`, walking from each seed in turn.
///
/// The visited table is shared between seeds, so every node appears once, under
/// the first seed that reaches it.
pub fn reachable_from<G, I>(graph: &G, order: Traversal, seeds: I) -> Vec<NodeId>
where
    G: Successors,
    I: IntoIterator<Item = NodeId>,
{
    let mut visited = vec![false; graph.node_bound()];
    let mut nodes = Vec::new();
    for seed in seeds {
        match order {
            Traversal::DepthFirst => {
                walk::<G, DepthFirst<_>>(graph, seed, &mut visited, &mut nodes);
            }
            Traversal::BreadthFirst => {
                walk::<G, BreadthFirst<_>>(graph, seed, &mut visited, &mut nodes);
            }
        }
    }
    nodes
}

fn walk<G, F>(graph: &G, seed: NodeId, visited: &mut [bool], nodes: &mut Vec<NodeId>)
where
    G: Successors,
    F: Frontier<NodeId>,
{
    if graph.key(seed).is_none() {
        return;
    }

    let mut frontier = F::default();
    frontier.push(seed);
    while let Some(current) = frontier.pop() {
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;
        nodes.push(current);

        for (child, _) in graph.successors(current) {
            if !visited[child.index()] {
                frontier.push(child);
            }
        }
    }
}
