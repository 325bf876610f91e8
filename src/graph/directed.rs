//! The directed graph façade.
//!
//! This module provides [`DirectedGraph`], the type callers build and query. It
//! composes a [`NodeStore`] with the search engine, the selection cursor and the
//! [`GraphConfig`] policies. Mutation operations live in the sibling `mutation`
//! module, path queries in `paths` and text/DOT output in `render`.
//!
//! # Keys, Payloads and Edges
//!
//! - `K` identifies a node and is the only way callers address nodes
//! - `V` is the node payload, independent of identity (defaults to `()`)
//! - `E` is the edge payload (defaults to `()`); `E::default()` is the "no edge"
//!   value handed to search hooks for the seed
//!
//! # Unknown Keys
//!
//! Queries on keys that are not in the graph return empty results or `false`;
//! they never fail. Only operations that need a particular edge or a selection
//! return errors.

use std::hash::Hash;

use crate::{
    config::GraphConfig,
    graph::{
        search::{self, SearchHooks, Traversal},
        traits::{Predecessors, Successors},
        NodeId, NodeStore,
    },
    Error, Result,
};

/// A directed graph keyed by caller-supplied node identities.
///
/// Nodes may have any number of parents, so the structure is a general directed
/// (multi)graph rather than a tree. Both adjacency directions are indexed and the
/// set of roots (nodes without parents) is maintained incrementally.
///
/// # Examples
///
/// ```rust
/// use rootgraph::DirectedGraph;
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::with_root(0);
/// graph.add_child(0, 1, ())?;
/// graph.add_child(0, 2, ())?;
/// graph.add_child(1, 10, ())?;
/// graph.add_child(10, 100, ())?;
///
/// assert!(graph.depth_search(&0, &100));
/// assert!(!graph.depth_search(&0, &999));
///
/// graph.remove(&1);
/// assert_eq!(graph.root_nodes(), vec![0, 10]);
/// assert_eq!(graph.children(&0), vec![(2, ())]);
/// # Ok::<(), rootgraph::Error>(())
/// ```
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`] when `K`, `V` and `E` are. It is a plain
/// single-threaded data structure; share it behind a lock if it must be mutated
/// from several threads.
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, V = (), E = ()>
where
    K: Hash + Eq,
{
    pub(crate) store: NodeStore<K, V, E>,
    pub(crate) selected: Option<NodeId>,
    pub(crate) config: GraphConfig,
}

impl<K, V, E> Default for DirectedGraph<K, V, E>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq,
{
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        DirectedGraph {
            store: NodeStore::new(),
            selected: None,
            config,
        }
    }

    /// Returns the configuration of this graph.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the underlying store.
    ///
    /// The store implements the traits in [`graph::traits`](crate::graph::traits), so
    /// it can be handed to the handle-level algorithms directly.
    #[must_use]
    pub fn store(&self) -> &NodeStore<K, V, E> {
        &self.store
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.node_count()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the number of edges, counting parallel edges individually.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Returns true if `key` is a node of this graph.
    #[must_use]
    pub fn has_node(&self, key: &K) -> bool {
        self.store.has_node(key)
    }

    /// Returns true if at least one edge leads from `parent` to `child`.
    #[must_use]
    pub fn has_child(&self, parent: &K, child: &K) -> bool {
        match (self.store.id_of(parent), self.store.id_of(child)) {
            (Some(p), Some(c)) => self.store.has_edge(p, c),
            _ => false,
        }
    }

    /// Returns the payload of `key`.
    #[must_use]
    pub fn payload(&self, key: &K) -> Option<&V> {
        self.store.id_of(key).and_then(|node| self.store.payload(node))
    }

    /// Returns the payload of `key` mutably.
    pub fn payload_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.store.id_of(key)?;
        self.store.payload_mut(node)
    }

    /// Returns true if a node is currently selected.
    #[must_use]
    pub fn has_selected_node(&self) -> bool {
        self.selected.is_some()
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Returns the selected node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelection`] if no node is selected.
    pub fn selected_node(&self) -> Result<&K> {
        self.selected
            .and_then(|node| self.store.key(node))
            .ok_or(Error::NoSelection("selected_node"))
    }

    /// Returns an iterator over `(key, payload)` pairs.
    ///
    /// Nodes are yielded depth-first from each root in root-set order, children in
    /// insertion order, each node once. Nodes that no root reaches (members of
    /// parentless cycles) follow, in store order. The order is stable for as long as
    /// the graph is not mutated.
    pub fn iter(&self) -> Nodes<'_, K, V, E> {
        Nodes::new(&self.store)
    }

    /// Returns an iterator over the keys, in the order of [`iter`](Self::iter).
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq + Clone,
{
    /// Creates a graph holding a single root, which also becomes the selection.
    #[must_use]
    pub fn with_root(key: K) -> Self
    where
        V: Default,
    {
        Self::with_root_payload(key, V::default())
    }

    /// Creates a graph holding a single root with the given payload, which also
    /// becomes the selection.
    #[must_use]
    pub fn with_root_payload(key: K, payload: V) -> Self {
        let mut graph = Self::new();
        let (root, _) = graph.store.insert(key, payload);
        graph.selected = Some(root);
        graph
    }

    /// Inserts `key` as an isolated root, or replaces the payload of an existing node.
    ///
    /// Returns true if a new node was created. Edges of an existing node are left
    /// untouched.
    pub fn insert_node(&mut self, key: K, payload: V) -> bool {
        if let Some(node) = self.store.id_of(&key) {
            if let Some(slot) = self.store.payload_mut(node) {
                *slot = payload;
            }
            return false;
        }
        self.store.insert(key, payload).1
    }

    /// Returns the child edges of `parent` in insertion order.
    ///
    /// Unknown keys yield an empty list.
    #[must_use]
    pub fn children(&self, parent: &K) -> Vec<(K, E)>
    where
        E: Clone,
    {
        self.store.children(parent)
    }

    /// Returns the parent edges of `child` in insertion order.
    ///
    /// Unknown keys yield an empty list.
    #[must_use]
    pub fn parents(&self, child: &K) -> Vec<(K, E)>
    where
        E: Clone,
    {
        self.store.parents(child)
    }

    /// Returns the keys of all roots in root-set order.
    ///
    /// A node joins the root set when it is inserted without a parent or when it
    /// loses its last parent, and leaves it when it gains one.
    #[must_use]
    pub fn root_nodes(&self) -> Vec<K> {
        self.store.root_keys()
    }

    /// Returns the keys of all nodes without children, in store order.
    #[must_use]
    pub fn leaf_nodes(&self) -> Vec<K> {
        use crate::graph::traits::GraphBase;

        self.store
            .node_ids()
            .filter(|&node| self.store.out_degree(node) == 0)
            .filter_map(|node| self.store.key(node).cloned())
            .collect()
    }

    /// Runs a search from `seed` with the given visiting order and hooks.
    ///
    /// With a target, returns `Ok(true)` as soon as the target is reached. Without
    /// one, or when the target is not reachable, every node reachable from `seed` is
    /// visited once and `Ok(false)` is returned. An unknown `seed` returns `Ok(false)`
    /// without calling any hook.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn search_with<H>(
        &self,
        order: Traversal,
        seed: &K,
        target: Option<&K>,
        hooks: &mut H,
    ) -> Result<bool>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        let Some(seed) = self.store.id_of(seed) else {
            return Ok(false);
        };
        let target = target.and_then(|key| self.store.id_of(key));
        search::search_with(&self.store, order, seed, target, hooks)
    }

    /// Runs a search from every root in turn until `target` is found.
    ///
    /// Each root gets a fresh visited set.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn targeted_search_with<H>(&self, order: Traversal, target: &K, hooks: &mut H) -> Result<bool>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        let target = self.store.id_of(target);
        search::search_from_roots(&self.store, order, target, hooks)
    }

    /// Visits every node reachable from `seed`, calling `hooks` for each.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn seeded_search_with<H>(&self, order: Traversal, seed: &K, hooks: &mut H) -> Result<()>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        self.search_with(order, seed, None, hooks).map(|_| ())
    }

    /// Visits every node reachable from each root in turn.
    ///
    /// A node reachable from several roots is visited once per root.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn seeded_search_all_with<H>(&self, order: Traversal, hooks: &mut H) -> Result<()>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        search::search_from_roots(&self.store, order, None, hooks).map(|_| ())
    }

    /// Returns true if `target` is reachable from `seed`, searching depth-first.
    #[must_use]
    pub fn depth_search(&self, seed: &K, target: &K) -> bool
    where
        E: Default,
    {
        matches!(
            self.search_with(Traversal::DepthFirst, seed, Some(target), &mut ()),
            Ok(true)
        )
    }

    /// Returns true if `target` is reachable from `seed`, searching breadth-first.
    #[must_use]
    pub fn breadth_search(&self, seed: &K, target: &K) -> bool
    where
        E: Default,
    {
        matches!(
            self.search_with(Traversal::BreadthFirst, seed, Some(target), &mut ()),
            Ok(true)
        )
    }

    /// Returns true if `target` is reachable from any root, searching depth-first.
    #[must_use]
    pub fn targeted_depth_search(&self, target: &K) -> bool
    where
        E: Default,
    {
        matches!(
            self.targeted_search_with(Traversal::DepthFirst, target, &mut ()),
            Ok(true)
        )
    }

    /// Returns true if `target` is reachable from any root, searching breadth-first.
    #[must_use]
    pub fn targeted_breadth_search(&self, target: &K) -> bool
    where
        E: Default,
    {
        matches!(
            self.targeted_search_with(Traversal::BreadthFirst, target, &mut ()),
            Ok(true)
        )
    }

    /// Depth-first traversal of everything reachable from `seed`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn seeded_depth_search<H>(&self, seed: &K, hooks: &mut H) -> Result<()>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        self.seeded_search_with(Traversal::DepthFirst, seed, hooks)
    }

    /// Breadth-first traversal of everything reachable from `seed`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn seeded_breadth_search<H>(&self, seed: &K, hooks: &mut H) -> Result<()>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        self.seeded_search_with(Traversal::BreadthFirst, seed, hooks)
    }

    /// Depth-first traversal from every root in turn.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn seeded_depth_search_all<H>(&self, hooks: &mut H) -> Result<()>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        self.seeded_search_all_with(Traversal::DepthFirst, hooks)
    }

    /// Breadth-first traversal from every root in turn.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a hook.
    pub fn seeded_breadth_search_all<H>(&self, hooks: &mut H) -> Result<()>
    where
        E: Default,
        H: SearchHooks<K, E>,
    {
        self.seeded_search_all_with(Traversal::BreadthFirst, hooks)
    }
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq + Clone,
{
    /// Returns the first `(child, edge)` entry of `parent` that leads to `child`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `parent` is unknown or has no edge to `child`.
    pub fn find_child(&self, parent: &K, child: &K) -> Result<(K, E)>
    where
        E: Clone,
    {
        let edge = self.edge_between(parent, child)?;
        Ok((child.clone(), edge))
    }

    /// Returns the payload of the first edge from `parent` to `child`.
    ///
    /// Keys need not implement `Debug`; error messages name nodes by handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `parent` is unknown or has no edge to `child`.
    pub fn edge_between(&self, parent: &K, child: &K) -> Result<E>
    where
        E: Clone,
    {
        let Some(p) = self.store.id_of(parent) else {
            return Err(not_found!("parent node does not exist"));
        };
        let Some(c) = self.store.id_of(child) else {
            return Err(not_found!("child node of {} does not exist", p));
        };
        self.store
            .edge(p, c)
            .cloned()
            .ok_or_else(|| not_found!("no edge from {} to {}", p, c))
    }

    /// Makes `key` the selected node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `key` is not a node of this graph; the previous
    /// selection is kept.
    pub fn select(&mut self, key: &K) -> Result<()> {
        match self.store.id_of(key) {
            Some(node) => {
                self.selected = Some(node);
                Ok(())
            }
            None => Err(not_found!("cannot select a node outside the graph")),
        }
    }
}

/// Iterator over the nodes of a [`DirectedGraph`], see [`DirectedGraph::iter`].
pub struct Nodes<'g, K, V, E>
where
    K: Hash + Eq,
{
    store: &'g NodeStore<K, V, E>,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
    seeds: std::vec::IntoIter<NodeId>,
}

impl<'g, K, V, E> Nodes<'g, K, V, E>
where
    K: Hash + Eq,
{
    fn new(store: &'g NodeStore<K, V, E>) -> Self {
        use crate::graph::traits::GraphBase;

        // Roots first, then every node so that root-less cycles are not lost.
        let seeds: Vec<NodeId> = store.root_ids().chain(store.node_ids()).collect();
        Nodes {
            store,
            stack: Vec::new(),
            visited: vec![false; store.node_bound()],
            seeds: seeds.into_iter(),
        }
    }
}

impl<'g, K, V, E> Iterator for Nodes<'g, K, V, E>
where
    K: Hash + Eq,
{
    type Item = (&'g K, &'g V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.stack.pop() {
                // Push unvisited children in reverse so they come out in insertion order
                let children: Vec<NodeId> = self.store.successors(node).map(|(c, _)| c).collect();
                for &child in children.iter().rev() {
                    if !self.visited[child.index()] {
                        self.visited[child.index()] = true;
                        self.stack.push(child);
                    }
                }
                let key = self.store.key(node)?;
                let payload = self.store.payload(node)?;
                return Some((key, payload));
            }

            let seed = self.seeds.find(|seed| !self.visited[seed.index()])?;
            self.visited[seed.index()] = true;
            self.stack.push(seed);
        }
    }
}

impl<'g, K, V, E> IntoIterator for &'g DirectedGraph<K, V, E>
where
    K: Hash + Eq,
{
    type Item = (&'g K, &'g V);
    type IntoIter = Nodes<'g, K, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Maps an adjacency list to keys.
fn resolve<'a, K, V, E>(
    store: &'a NodeStore<K, V, E>,
    list: impl Iterator<Item = (NodeId, &'a E)>,
) -> Vec<(&'a K, &'a E)>
where
    K: Hash + Eq,
{
    list.filter_map(|(node, edge)| store.key(node).map(|key| (key, edge)))
        .collect()
}

/// Compares two adjacency lists as multisets.
fn same_edges<K: PartialEq, E: PartialEq>(ours: &[(&K, &E)], theirs: &[(&K, &E)]) -> bool {
    if ours.len() != theirs.len() {
        return false;
    }
    let mut used = vec![false; theirs.len()];
    ours.iter().all(|entry| {
        let matched = theirs
            .iter()
            .enumerate()
            .position(|(i, candidate)| !used[i] && candidate == entry);
        match matched {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

/// Two graphs are equal when they hold the same keys and, for every key, the same
/// child and parent edges compared as multisets.
///
/// Sibling order, node payloads, the selection and the configuration do not take
/// part in the comparison; parallel edge multiplicity does.
impl<K, V, E> PartialEq for DirectedGraph<K, V, E>
where
    K: Hash + Eq,
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        use crate::graph::traits::GraphBase;

        if self.store.node_count() != other.store.node_count()
            || self.store.edge_count() != other.store.edge_count()
        {
            return false;
        }

        self.store.node_ids().all(|ours| {
            let Some(key) = self.store.key(ours) else {
                return false;
            };
            let Some(theirs) = other.store.id_of(key) else {
                return false;
            };

            let our_children = resolve(&self.store, self.store.successors(ours));
            let their_children = resolve(&other.store, other.store.successors(theirs));
            let our_parents = resolve(&self.store, self.store.predecessors(ours));
            let their_parents = resolve(&other.store, other.store.predecessors(theirs));

            same_edges(&our_children, &their_children) && same_edges(&our_parents, &their_parents)
        })
    }
}

impl<K, V, E> Eq for DirectedGraph<K, V, E>
where
    K: Hash + Eq,
    E: Eq,
{
}
