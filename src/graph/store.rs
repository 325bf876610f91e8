//! Arena-backed node and edge storage.
//!
//! This module provides [`NodeStore`], the storage layer underneath
//! [`DirectedGraph`](crate::DirectedGraph). It owns every node record and keeps the
//! two adjacency relations and the root set consistent with each other.
//!
//! # Memory Layout
//!
//! - Node records live in a slot vector indexed by [`NodeId`]; freed slots are
//!   recycled through a free list, so handles of live nodes never move
//! - A hash index maps caller keys to handles
//! - Each record holds its own child and parent edge lists, storing the edge
//!   payload on both sides
//! - Roots are kept in an ordered map keyed by a sequence number taken when the
//!   node became a root. Each record remembers its own number, so leaving the root
//!   set is O(log n) wherever the node sits, enumeration is O(roots) and the order
//!   is deterministic
//!
//! # Invariants
//!
//! Every mutation maintains:
//!
//! 1. `(child, e)` is in the child list of `parent` exactly as often as `(parent, e)`
//!    is in the parent list of `child`
//! 2. Every handle referenced from an adjacency list or the root set is live
//! 3. A node is in the root set exactly when its parent list is empty
//!
//! # Unknown Keys
//!
//! Key-level queries on unknown keys return empty results and key-level mutations
//! on unknown keys are no-ops. Nothing in this module returns an error.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::graph::{
    traits::{GraphBase, Predecessors, RootedGraph, Successors},
    NodeId,
};

/// Internal storage for one node.
#[derive(Debug, Clone)]
struct NodeRecord<K, V, E> {
    /// Caller-facing identity
    key: K,
    /// Caller-facing payload
    payload: V,
    /// Outgoing edges in insertion order
    children: Vec<(NodeId, E)>,
    /// Incoming edges in insertion order
    parents: Vec<(NodeId, E)>,
    /// Position in the root set, `None` while the node has parents
    root_seq: Option<u64>,
}

/// Storage for nodes, their payloads and the edges between them.
///
/// # Type Parameters
///
/// * `K` - Node identity, used as the lookup key
/// * `V` - Node payload
/// * `E` - Edge payload
///
/// # Examples
///
/// ```rust
/// use rootgraph::graph::NodeStore;
///
/// let mut store: NodeStore<&str, (), u8> = NodeStore::new();
/// store.add_edge("a", "b", 1);
/// store.add_edge("a", "c", 2);
///
/// assert_eq!(store.children(&"a"), vec![("b", 1), ("c", 2)]);
/// assert_eq!(store.parents(&"c"), vec![("a", 2)]);
/// assert_eq!(store.root_keys(), vec!["a"]);
///
/// store.remove_node(&"a");
/// assert_eq!(store.root_keys(), vec!["b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    /// Node records, `None` for freed slots
    slots: Vec<Option<NodeRecord<K, V, E>>>,
    /// Freed slots available for reuse
    free: Vec<NodeId>,
    /// Key to handle index
    index: HashMap<K, NodeId>,
    /// Parentless nodes keyed by the sequence number taken when they became roots
    roots: BTreeMap<u64, NodeId>,
    /// Next root sequence number
    next_root_seq: u64,
    /// Number of edges, counting parallel edges individually
    edge_count: usize,
}

impl<K, V, E> Default for NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        NodeStore {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            roots: BTreeMap::new(),
            next_root_seq: 0,
            edge_count: 0,
        }
    }

    /// Creates an empty store with room for `node_capacity` nodes.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        NodeStore {
            slots: Vec::with_capacity(node_capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(node_capacity),
            roots: BTreeMap::new(),
            next_root_seq: 0,
            edge_count: 0,
        }
    }

    fn record(&self, node: NodeId) -> Option<&NodeRecord<K, V, E>> {
        self.slots.get(node.index()).and_then(Option::as_ref)
    }

    fn record_mut(&mut self, node: NodeId) -> Option<&mut NodeRecord<K, V, E>> {
        self.slots.get_mut(node.index()).and_then(Option::as_mut)
    }

    /// Appends `node` to the root set unless it is already a root.
    fn promote(&mut self, node: NodeId) {
        let seq = self.next_root_seq;
        let Some(record) = self.record_mut(node) else {
            return;
        };
        if record.root_seq.is_some() {
            return;
        }
        record.root_seq = Some(seq);
        self.next_root_seq += 1;
        self.roots.insert(seq, node);
    }

    /// Takes `node` out of the root set.
    fn demote(&mut self, node: NodeId) {
        if let Some(seq) = self.record_mut(node).and_then(|r| r.root_seq.take()) {
            self.roots.remove(&seq);
        }
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of edges, counting parallel edges individually.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the handle of `key`, if present.
    #[must_use]
    pub fn id_of(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn has_node(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns true if `node` refers to a live record.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.record(node).is_some()
    }

    /// Returns the key of `node`.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.record(node).map(|r| &r.key)
    }

    /// Returns the payload of `node`.
    #[must_use]
    pub fn payload(&self, node: NodeId) -> Option<&V> {
        self.record(node).map(|r| &r.payload)
    }

    /// Returns the payload of `node` mutably.
    pub fn payload_mut(&mut self, node: NodeId) -> Option<&mut V> {
        self.record_mut(node).map(|r| &mut r.payload)
    }

    /// Returns true if `node` currently has no parents.
    #[must_use]
    pub fn is_root(&self, node: NodeId) -> bool {
        self.record(node).is_some_and(|r| r.root_seq.is_some())
    }

    /// Returns the root handles in root-set order.
    pub fn root_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.values().copied()
    }

    /// Returns the number of child edges of `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.record(node).map_or(0, |r| r.children.len())
    }

    /// Returns the number of parent edges of `node`.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.record(node).map_or(0, |r| r.parents.len())
    }

    /// Returns true if at least one edge leads from `parent` to `child`.
    #[must_use]
    pub fn has_edge(&self, parent: NodeId, child: NodeId) -> bool {
        self.record(parent)
            .is_some_and(|r| r.children.iter().any(|(c, _)| *c == child))
    }

    /// Returns the payload of the first edge from `parent` to `child`.
    #[must_use]
    pub fn edge(&self, parent: NodeId, child: NodeId) -> Option<&E> {
        self.record(parent)?
            .children
            .iter()
            .find(|(c, _)| *c == child)
            .map(|(_, edge)| edge)
    }

    /// Removes `node` together with every edge touching it.
    ///
    /// Former children left without any parent join the root set, in the order in
    /// which they appeared in the removed node's child list. Descendants are not
    /// removed. Returns the removed key and payload, or `None` for a dead handle.
    pub fn remove(&mut self, node: NodeId) -> Option<(K, V)> {
        let record = self.slots.get_mut(node.index())?.take()?;
        self.index.remove(&record.key);
        if let Some(seq) = record.root_seq {
            self.roots.remove(&seq);
        }
        self.free.push(node);

        // Self-loops sit in both lists of the removed record; count them once.
        let incoming = record.parents.iter().filter(|(p, _)| *p != node).count();
        self.edge_count -= record.children.len() + incoming;

        for (parent, _) in &record.parents {
            if *parent == node {
                continue;
            }
            if let Some(p) = self.record_mut(*parent) {
                p.children.retain(|(c, _)| *c != node);
            }
        }

        for (child, _) in &record.children {
            if *child == node {
                continue;
            }
            let orphaned = match self.record_mut(*child) {
                Some(c) => {
                    c.parents.retain(|(p, _)| *p != node);
                    c.parents.is_empty()
                }
                None => false,
            };
            if orphaned {
                self.promote(*child);
            }
        }

        Some((record.key, record.payload))
    }

    /// Removes the node stored under `key`, see [`remove`](NodeStore::remove).
    ///
    /// Unknown keys are ignored. Returns the removed payload.
    pub fn remove_node(&mut self, key: &K) -> Option<V> {
        let node = self.id_of(key)?;
        self.remove(node).map(|(_, payload)| payload)
    }
}

impl<K, V, E> NodeStore<K, V, E>
where
    K: Hash + Eq + Clone,
{
    /// Inserts `key` as a new, edge-less root node.
    ///
    /// If the key is already present the existing handle is returned, the stored
    /// payload is kept and `payload` is dropped. The boolean is true when a new node
    /// was created.
    pub fn insert(&mut self, key: K, payload: V) -> (NodeId, bool) {
        if let Some(&node) = self.index.get(&key) {
            return (node, false);
        }

        let record = NodeRecord {
            key: key.clone(),
            payload,
            children: Vec::new(),
            parents: Vec::new(),
            root_seq: None,
        };

        let node = match self.free.pop() {
            Some(slot) => {
                self.slots[slot.index()] = Some(record);
                slot
            }
            None => {
                self.slots.push(Some(record));
                NodeId::new(self.slots.len() - 1)
            }
        };

        self.index.insert(key, node);
        self.promote(node);
        (node, true)
    }

    /// Returns the handle of `key`, inserting it with a default payload if needed.
    pub fn ensure(&mut self, key: K) -> NodeId
    where
        V: Default,
    {
        match self.index.get(&key) {
            Some(&node) => node,
            None => self.insert(key, V::default()).0,
        }
    }

    /// Returns a list of `(key, edge)` pairs for the given adjacency list.
    fn resolve(&self, list: &[(NodeId, E)]) -> Vec<(K, E)>
    where
        E: Clone,
    {
        list.iter()
            .filter_map(|(node, edge)| self.key(*node).map(|k| (k.clone(), edge.clone())))
            .collect()
    }

    /// Returns the child edges of `parent` in insertion order.
    ///
    /// Unknown keys yield an empty list.
    #[must_use]
    pub fn children(&self, parent: &K) -> Vec<(K, E)>
    where
        E: Clone,
    {
        self.id_of(parent)
            .and_then(|node| self.record(node))
            .map_or_else(Vec::new, |r| self.resolve(&r.children))
    }

    /// Returns the parent edges of `child` in insertion order.
    ///
    /// Unknown keys yield an empty list.
    #[must_use]
    pub fn parents(&self, child: &K) -> Vec<(K, E)>
    where
        E: Clone,
    {
        self.id_of(child)
            .and_then(|node| self.record(node))
            .map_or_else(Vec::new, |r| self.resolve(&r.parents))
    }

    /// Returns the keys of all roots in root-set order.
    #[must_use]
    pub fn root_keys(&self) -> Vec<K> {
        self.roots
            .values()
            .filter_map(|&node| self.key(node).cloned())
            .collect()
    }

    /// Appends an edge from `parent` to `child`.
    ///
    /// Both handles must be live; otherwise nothing changes and false is returned.
    /// The child leaves the root set. Parallel edges are appended like any other.
    pub fn link(&mut self, parent: NodeId, child: NodeId, edge: E) -> bool
    where
        E: Clone,
    {
        if !self.contains(parent) || !self.contains(child) {
            return false;
        }

        if let Some(p) = self.record_mut(parent) {
            p.children.push((child, edge.clone()));
        }
        if let Some(c) = self.record_mut(child) {
            c.parents.push((parent, edge));
        }

        self.demote(child);
        self.edge_count += 1;
        true
    }

    /// Appends an edge from `parent` to `child`, creating either endpoint if needed.
    ///
    /// New nodes receive a default payload. Returns the handles of both endpoints.
    pub fn add_edge(&mut self, parent: K, child: K, edge: E) -> (NodeId, NodeId)
    where
        V: Default,
        E: Clone,
    {
        let parent = self.ensure(parent);
        let child = self.ensure(child);
        self.link(parent, child, edge);
        (parent, child)
    }
}

impl<K, V, E> GraphBase for NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    type Key = K;
    type Edge = E;

    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn node_bound(&self) -> usize {
        self.slots.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId::new(i))
    }

    fn key(&self, node: NodeId) -> Option<&K> {
        self.record(node).map(|r| &r.key)
    }

    fn node_id(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }
}

impl<K, V, E> Successors for NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    fn successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &E)> {
        self.record(node)
            .map_or(&[][..], |r| r.children.as_slice())
            .iter()
            .map(|(child, edge)| (*child, edge))
    }
}

impl<K, V, E> Predecessors for NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &E)> {
        self.record(node)
            .map_or(&[][..], |r| r.parents.as_slice())
            .iter()
            .map(|(parent, edge)| (*parent, edge))
    }
}

impl<K, V, E> RootedGraph for NodeStore<K, V, E>
where
    K: Hash + Eq,
{
    fn roots(&self) -> impl Iterator<Item = NodeId> {
        self.roots.values().copied()
    }
}
