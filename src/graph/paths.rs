//! Path and cycle queries.
//!
//! Both algorithms work on handles through the [`Successors`] trait and are wrapped
//! by key-level methods on [`DirectedGraph`].
//!
//! # Cycle Detection
//!
//! [`has_cycle`] is a three-color depth-first search: a node is [`Touched`] while it
//! is on the current path and [`Searched`] once all its descendants are done. An edge
//! into a touched node is a back edge and proves a cycle. The walk keeps an explicit
//! stack, so deep graphs cannot overflow the call stack.
//!
//! [`Touched`]: SearchStatus::Touched
//! [`Searched`]: SearchStatus::Searched

use std::hash::Hash;

use crate::graph::{
    search::{BreadthFirst, Frontier, SearchStatus},
    traits::Successors,
    DirectedGraph, NodeId,
};

/// Finds a shortest path (in number of edges) from `start` to `end`.
///
/// Returns the handles along the path, both endpoints included. A path from a live
/// node to itself is just that node. Returns `None` if `end` is not reachable or
/// either handle is dead.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn shortest_path<G: Successors>(graph: &G, start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
    graph.key(start)?;
    graph.key(end)?;
    if start == end {
        return Some(vec![start]);
    }

    let mut previous: Vec<Option<NodeId>> = vec![None; graph.node_bound()];
    let mut discovered = vec![false; graph.node_bound()];
    let mut frontier = BreadthFirst::default();

    discovered[start.index()] = true;
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        for (child, _) in graph.successors(current) {
            if discovered[child.index()] {
                continue;
            }
            discovered[child.index()] = true;
            previous[child.index()] = Some(current);

            if child == end {
                let mut path = vec![end];
                let mut step = current;
                loop {
                    path.push(step);
                    match previous[step.index()] {
                        Some(before) => step = before,
                        None => break,
                    }
                }
                path.reverse();
                return Some(path);
            }
            frontier.push(child);
        }
    }

    None
}

/// Returns true if `graph` contains a directed cycle, self-loops included.
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    let mut status = vec![SearchStatus::Unvisited; graph.node_bound()];
    let children_of = |node: NodeId| -> Vec<NodeId> { graph.successors(node).map(|(c, _)| c).collect() };

    for start in graph.node_ids() {
        if status[start.index()] != SearchStatus::Unvisited {
            continue;
        }

        status[start.index()] = SearchStatus::Touched;
        let mut stack = vec![(start, children_of(start), 0usize)];

        while let Some((node, children, next)) = stack.last_mut() {
            match children.get(*next).copied() {
                Some(child) => {
                    *next += 1;
                    match status[child.index()] {
                        SearchStatus::Touched => return true,
                        SearchStatus::Unvisited => {
                            status[child.index()] = SearchStatus::Touched;
                            let grandchildren = children_of(child);
                            stack.push((child, grandchildren, 0));
                        }
                        SearchStatus::Searched => {}
                    }
                }
                None => {
                    status[node.index()] = SearchStatus::Searched;
                    stack.pop();
                }
            }
        }
    }

    false
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq + Clone,
{
    /// Returns a shortest path from `start` to `end` as a list of keys.
    ///
    /// The path includes both endpoints; the path from a node to itself is
    /// `[start]`. Returns `None` if either key is unknown or `end` is unreachable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootgraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<char> = DirectedGraph::new();
    /// graph.add_child('a', 'b', ())?;
    /// graph.add_child('b', 'c', ())?;
    /// graph.add_child('a', 'c', ())?;
    ///
    /// assert_eq!(graph.find_path(&'a', &'c'), Some(vec!['a', 'c']));
    /// assert_eq!(graph.find_path(&'c', &'a'), None);
    /// # Ok::<(), rootgraph::Error>(())
    /// ```
    #[must_use]
    pub fn find_path(&self, start: &K, end: &K) -> Option<Vec<K>> {
        let start = self.store.id_of(start)?;
        let end = self.store.id_of(end)?;
        let path = shortest_path(&self.store, start, end)?;
        path.into_iter()
            .map(|node| self.store.key(node).cloned())
            .collect()
    }

    /// Returns true if the graph contains a directed cycle, self-loops included.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        has_cycle(&self.store)
    }
}
