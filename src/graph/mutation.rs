//! Structural mutations of a [`DirectedGraph`].
//!
//! # Removal Flavours
//!
//! | Operation | Node | Descendants | Parents of node |
//! |-----------|------|-------------|-----------------|
//! | [`remove`](DirectedGraph::remove) | deleted | kept, orphans become roots | lose the edge |
//! | [`pluck`](DirectedGraph::pluck) | deleted | kept, re-attached to the parents | gain edges to the children |
//! | [`trim`](DirectedGraph::trim) | deleted | everything reachable is deleted | lose the edge |
//!
//! Every removal clears the selection if it pointed at a deleted node.
//!
//! # Failure Atomicity
//!
//! Operations that add several edges ([`attach`](DirectedGraph::attach),
//! [`append`](DirectedGraph::append), [`replace`](DirectedGraph::replace)) either
//! complete or leave the graph untouched. Under the default configuration no edge can
//! be refused, so they run in place; under a restricted [`GraphConfig`] they run on a
//! staged copy that replaces the graph only on success.
//!
//! [`GraphConfig`]: crate::GraphConfig

use std::hash::Hash;

use log::{debug, warn};

use crate::{
    config::{CyclePolicy, ParallelEdges},
    graph::{
        paths,
        search::{self, Traversal},
        traits::{GraphBase, Predecessors, RootedGraph, Successors},
        DirectedGraph, NodeId,
    },
    Error, Result,
};

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq,
{
    /// Removes `key` and every edge touching it.
    ///
    /// Children left without parents become roots. Unknown keys are ignored.
    /// Returns the payload of the removed node.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.store.id_of(key)?;
        self.remove_id(node)
    }

    fn remove_id(&mut self, node: NodeId) -> Option<V> {
        if self.selected == Some(node) {
            self.selected = None;
        }
        debug!("removing node {node}");
        self.store.remove(node).map(|(_, payload)| payload)
    }

    /// Removes `key`, connecting each of its parents directly to each of its children.
    ///
    /// A new edge `parent -> child` is added for every combination of incoming and
    /// outgoing edge, carrying the payload of the incoming edge. Self-loops on `key`
    /// are dropped with it. Under [`ParallelEdges::Ignore`] no edge is added for a pair
    /// that is already connected.
    ///
    /// Reconnecting cannot close a new cycle: every added edge replaces a path through
    /// `key`. Unknown keys are ignored.
    pub fn pluck(&mut self, key: &K) -> Option<V>
    where
        K: Clone,
        E: Clone,
    {
        let node = self.store.id_of(key)?;

        let parents: Vec<(NodeId, E)> = self
            .store
            .predecessors(node)
            .filter(|(parent, _)| *parent != node)
            .map(|(parent, edge)| (parent, edge.clone()))
            .collect();
        let children: Vec<NodeId> = self
            .store
            .successors(node)
            .filter(|(child, _)| *child != node)
            .map(|(child, _)| child)
            .collect();

        debug!(
            "plucking node {node}: {} parent(s), {} child(ren)",
            parents.len(),
            children.len()
        );

        for (parent, edge) in &parents {
            for &child in &children {
                if self.config.parallel_edges == ParallelEdges::Ignore
                    && self.store.has_edge(*parent, child)
                {
                    continue;
                }
                self.store.link(*parent, child, edge.clone());
            }
        }

        self.remove_id(node)
    }

    /// Removes `key` and every node reachable from it.
    ///
    /// The subtree is collected first by a depth-first walk from `key` and then
    /// deleted. Nodes outside the subtree that lose their last parent become roots.
    /// Unknown keys are ignored.
    ///
    /// Returns the number of removed nodes.
    pub fn trim(&mut self, key: &K) -> usize {
        let Some(node) = self.store.id_of(key) else {
            return 0;
        };
        let doomed = search::reachable(&self.store, Traversal::DepthFirst, node);

        debug!("trimming {} node(s) below {node}", doomed.len());
        let mut removed = 0;
        for node in doomed {
            if self.remove_id(node).is_some() {
                removed += 1;
            }
        }
        removed
    }
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq + Clone,
    V: Default,
    E: Clone,
{
    /// Adds an edge from `parent` to `child`, creating either node if it is missing.
    ///
    /// New nodes receive a default payload. The child stops being a root. With the
    /// default configuration this never fails and parallel edges accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleRejected`] under [`CyclePolicy::Reject`] if the edge
    /// would close a directed cycle; the graph is left unchanged.
    pub fn add_child(&mut self, parent: K, child: K, edge: E) -> Result<()> {
        let parent_id = self.store.id_of(&parent);
        let child_id = self.store.id_of(&child);

        if self.config.parallel_edges == ParallelEdges::Ignore {
            if let (Some(p), Some(c)) = (parent_id, child_id) {
                if self.store.has_edge(p, c) {
                    return Ok(());
                }
            }
        }

        if self.config.cycles == CyclePolicy::Reject && self.closes_cycle(&parent, &child) {
            let err = Error::CycleRejected {
                parent: parent_id,
                child: child_id,
            };
            warn!("rejecting edge: {err}");
            return Err(err);
        }

        self.store.add_edge(parent, child, edge);
        Ok(())
    }

    /// Adds an edge from the selected node to `child`.
    ///
    /// The selection does not move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelection`] if no node is selected, or any error of
    /// [`add_child`](Self::add_child).
    pub fn add_child_to_selected(&mut self, child: K, edge: E) -> Result<()> {
        let parent = self
            .selected
            .and_then(|node| self.store.key(node))
            .cloned()
            .ok_or(Error::NoSelection("add_child_to_selected"))?;
        self.add_child(parent, child, edge)
    }

    /// Returns true if an edge `parent -> child` would close a directed cycle.
    fn closes_cycle(&self, parent: &K, child: &K) -> bool {
        if parent == child {
            return true;
        }
        match (self.store.id_of(parent), self.store.id_of(child)) {
            (Some(p), Some(c)) => paths::shortest_path(&self.store, c, p).is_some(),
            _ => false,
        }
    }
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq + Clone,
    V: Clone + Default,
    E: Clone,
{
    /// Copies the rooted part of `subgraph` into this graph below `parent`.
    ///
    /// Every node reachable from a root of `subgraph` is copied together with its
    /// payload, and every edge between such nodes with its own payload. Each root of
    /// `subgraph` is additionally connected to `parent` through `edge`, so everything
    /// copied ends up a descendant of `parent`. Components of `subgraph` that no root
    /// reaches, such as a parentless cycle, are not copied.
    ///
    /// Keys already present in this graph keep their payload and simply gain the
    /// copied edges. `parent` is created if it is missing. If the selected node of
    /// `subgraph` is copied, it becomes the selection of this graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleRejected`] under [`CyclePolicy::Reject`] if any copied
    /// edge would close a cycle; the graph is left unchanged.
    pub fn attach(&mut self, parent: K, subgraph: &Self, edge: E) -> Result<()> {
        self.transact(|graph| graph.merge(parent, subgraph, edge))
    }

    /// Attaches `subgraph` below the selected node, or copies it into an empty graph.
    ///
    /// On an empty graph this graph becomes a copy of `subgraph`, including its
    /// selection and any component no root reaches. The configuration of this graph
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelection`] if the graph is non-empty and nothing is
    /// selected, or any error of [`attach`](Self::attach).
    pub fn append(&mut self, subgraph: &Self, edge: E) -> Result<()> {
        if let Some(parent) = self.selected.and_then(|node| self.store.key(node)).cloned() {
            return self.attach(parent, subgraph, edge);
        }
        if self.is_empty() {
            debug!("appending onto an empty graph copies the subgraph");
            self.store = subgraph.store.clone();
            self.selected = subgraph.selected;
            return Ok(());
        }
        Err(Error::NoSelection("append"))
    }

    /// Removes `node` and attaches `replacement` below `parent` in its place.
    ///
    /// With `edge` set to `None` the replacement is connected through the payload of
    /// the existing `parent -> node` edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `edge` is `None` and there is no edge from
    /// `parent` to `node`, or any error of [`attach`](Self::attach). On error the
    /// graph is left unchanged.
    pub fn replace(&mut self, node: &K, parent: K, replacement: &Self, edge: Option<E>) -> Result<()> {
        let edge = match edge {
            Some(edge) => edge,
            None => self.edge_between(&parent, node)?,
        };
        self.transact(|graph| {
            graph.remove(node);
            graph.merge(parent, replacement, edge)
        })
    }

    /// Runs `apply` so that a failure leaves the graph untouched.
    fn transact<F>(&mut self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if !self.config.is_restricted() {
            return apply(self);
        }
        let mut staged = self.clone();
        apply(&mut staged)?;
        *self = staged;
        Ok(())
    }

    fn merge(&mut self, parent: K, subgraph: &Self, edge: E) -> Result<()> {
        let sub = &subgraph.store;
        let roots: Vec<NodeId> = sub.roots().collect();
        let order = search::reachable_from(sub, Traversal::BreadthFirst, roots.iter().copied());
        debug!("copying {} of {} node(s) below a parent", order.len(), sub.node_count());

        let mut copied = vec![false; sub.node_bound()];
        for &node in &order {
            copied[node.index()] = true;
            if let (Some(key), Some(payload)) = (sub.key(node), sub.payload(node)) {
                self.store.insert(key.clone(), payload.clone());
            }
        }

        for &root in &roots {
            if let Some(key) = sub.key(root) {
                self.add_child(parent.clone(), key.clone(), edge.clone())?;
            }
        }

        for &node in &order {
            let Some(from) = sub.key(node) else {
                continue;
            };
            for (child, child_edge) in sub.successors(node) {
                if let Some(to) = sub.key(child) {
                    self.add_child(from.clone(), to.clone(), child_edge.clone())?;
                }
            }
        }

        let adopted = subgraph
            .selected
            .filter(|node| copied.get(node.index()).copied().unwrap_or(false))
            .and_then(|node| sub.key(node));
        if let Some(selected) = adopted {
            self.selected = self.store.id_of(selected);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{graph::NodeId, CyclePolicy, DirectedGraph, Error, GraphConfig, ParallelEdges};

    type Graph = DirectedGraph<&'static str, i32, &'static str>;

    fn create_linear_graph() -> Graph {
        let mut graph = DirectedGraph::new();
        graph.add_child("A", "B", "ab").unwrap();
        graph.add_child("B", "C", "bc").unwrap();
        graph
    }

    fn create_subgraph() -> Graph {
        // X -> Y -> Z, X -> Z
        let mut sub = DirectedGraph::with_root_payload("X", 24);
        sub.add_child("X", "Y", "xy").unwrap();
        sub.add_child("Y", "Z", "yz").unwrap();
        sub.add_child("X", "Z", "xz").unwrap();
        sub
    }

    #[test]
    fn test_add_child_creates_nodes() {
        let mut graph: Graph = DirectedGraph::new();
        graph.add_child("A", "B", "ab").unwrap();
        assert!(graph.has_node(&"A"));
        assert!(graph.has_node(&"B"));
        assert_eq!(graph.payload(&"B"), Some(&0));
        assert_eq!(graph.root_nodes(), vec!["A"]);
    }

    #[test]
    fn test_add_child_allows_parallel_edges_by_default() {
        let mut graph = create_linear_graph();
        graph.add_child("A", "B", "ab").unwrap();
        assert_eq!(graph.children(&"A"), vec![("B", "ab"), ("B", "ab")]);
        assert_eq!(graph.parents(&"B").len(), 2);
    }

    #[test]
    fn test_add_child_ignores_parallel_edges() {
        let config = GraphConfig::new().with_parallel_edges(ParallelEdges::Ignore);
        let mut graph: Graph = DirectedGraph::with_config(config);
        graph.add_child("A", "B", "first").unwrap();
        graph.add_child("A", "B", "second").unwrap();
        assert_eq!(graph.children(&"A"), vec![("B", "first")]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_child_allows_cycles_by_default() {
        let mut graph = create_linear_graph();
        graph.add_child("C", "A", "ca").unwrap();
        graph.add_child("B", "B", "bb").unwrap();
        assert!(graph.root_nodes().is_empty());
        assert!(graph.is_cyclic());
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let config = GraphConfig::new().with_cycles(CyclePolicy::Reject);
        let mut graph: Graph = DirectedGraph::with_config(config);
        graph.add_child("A", "B", "ab").unwrap();
        graph.add_child("B", "C", "bc").unwrap();

        let result = graph.add_child("C", "A", "ca");
        assert_eq!(
            result,
            Err(Error::CycleRejected {
                parent: Some(NodeId::new(2)),
                child: Some(NodeId::new(0)),
            })
        );
        assert!(graph.add_child("B", "B", "bb").is_err());
        assert_eq!(
            graph.add_child("Q", "Q", "qq"),
            Err(Error::CycleRejected {
                parent: None,
                child: None,
            })
        );
        assert!(!graph.has_node(&"Q"));
        assert_eq!(graph.edge_count(), 2);

        // A diamond is not a cycle.
        graph.add_child("A", "C", "ac").unwrap();
        assert!(!graph.is_cyclic());
    }

    #[test]
    fn test_add_child_to_selected() {
        let mut graph: Graph = DirectedGraph::with_root("root");
        graph.add_child_to_selected("leaf", "edge").unwrap();
        assert_eq!(graph.children(&"root"), vec![("leaf", "edge")]);
        assert_eq!(graph.selected_node(), Ok(&"root"));

        graph.deselect();
        assert_eq!(
            graph.add_child_to_selected("other", "edge"),
            Err(Error::NoSelection("add_child_to_selected"))
        );
        assert!(!graph.has_node(&"other"));
    }

    #[test]
    fn test_remove_splices() {
        let mut graph = create_linear_graph();
        assert_eq!(graph.remove(&"B"), Some(0));
        assert!(!graph.has_node(&"B"));
        assert!(graph.children(&"A").is_empty());
        assert_eq!(graph.root_nodes(), vec!["A", "C"]);
        assert_eq!(graph.remove(&"B"), None);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut graph: Graph = DirectedGraph::with_root("A");
        graph.add_child("A", "B", "ab").unwrap();
        graph.remove(&"B");
        assert!(graph.has_selected_node());
        graph.remove(&"A");
        assert!(!graph.has_selected_node());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_pluck_reconnects_with_incoming_payload() {
        let mut graph = create_linear_graph();
        graph.pluck(&"B");
        assert!(!graph.has_node(&"B"));
        assert!(graph.has_child(&"A", &"C"));
        assert_eq!(graph.edge_between(&"A", &"C"), Ok("ab"));
        assert_eq!(graph.root_nodes(), vec!["A"]);
    }

    #[test]
    fn test_pluck_many_to_many() {
        let mut graph: Graph = DirectedGraph::new();
        graph.add_child("P1", "M", "p1").unwrap();
        graph.add_child("P2", "M", "p2").unwrap();
        graph.add_child("M", "C1", "c1").unwrap();
        graph.add_child("M", "C2", "c2").unwrap();

        graph.pluck(&"M");
        assert_eq!(graph.children(&"P1"), vec![("C1", "p1"), ("C2", "p1")]);
        assert_eq!(graph.children(&"P2"), vec![("C1", "p2"), ("C2", "p2")]);
        assert_eq!(graph.parents(&"C1"), vec![("P1", "p1"), ("P2", "p2")]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_pluck_root_and_leaf() {
        let mut graph = create_linear_graph();
        graph.pluck(&"A");
        assert_eq!(graph.root_nodes(), vec!["B"]);

        graph.pluck(&"C");
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_pluck_drops_self_loop() {
        let mut graph: Graph = DirectedGraph::new();
        graph.add_child("A", "B", "ab").unwrap();
        graph.add_child("B", "B", "bb").unwrap();
        graph.add_child("B", "C", "bc").unwrap();

        graph.pluck(&"B");
        assert_eq!(graph.children(&"A"), vec![("C", "ab")]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_pluck_respects_ignored_parallel_edges() {
        let config = GraphConfig::new().with_parallel_edges(ParallelEdges::Ignore);
        let mut graph: Graph = DirectedGraph::with_config(config);
        graph.add_child("A", "B", "ab").unwrap();
        graph.add_child("B", "C", "bc").unwrap();
        graph.add_child("A", "C", "ac").unwrap();

        graph.pluck(&"B");
        assert_eq!(graph.children(&"A"), vec![("C", "ac")]);
    }

    #[test]
    fn test_trim_removes_subtree() {
        let mut graph = create_linear_graph();
        graph.add_child("A", "D", "ad").unwrap();

        assert_eq!(graph.trim(&"B"), 2);
        assert!(!graph.has_node(&"B"));
        assert!(!graph.has_node(&"C"));
        assert!(graph.has_node(&"D"));
        assert_eq!(graph.root_nodes(), vec!["A"]);
        assert_eq!(graph.children(&"A"), vec![("D", "ad")]);
    }

    #[test]
    fn test_trim_handles_cycles_and_unknown_keys() {
        let mut graph = create_linear_graph();
        graph.add_child("C", "B", "cb").unwrap();
        assert_eq!(graph.trim(&"B"), 2);
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.trim(&"nope"), 0);
    }

    #[test]
    fn test_trim_promotes_outside_children() {
        // B -> C, X -> C: trimming B removes C too, X loses its child
        let mut graph = create_linear_graph();
        graph.add_child("X", "C", "xc").unwrap();
        graph.trim(&"B");
        assert!(graph.children(&"X").is_empty());
        assert_eq!(graph.root_nodes(), vec!["A", "X"]);
    }

    #[test]
    fn test_attach_copies_structure() {
        let mut graph: Graph = DirectedGraph::with_root("R");
        let sub = create_subgraph();
        graph.attach("R", &sub, "link").unwrap();

        assert_eq!(graph.size(), 4);
        assert_eq!(graph.children(&"R"), vec![("X", "link")]);
        assert_eq!(graph.children(&"X"), vec![("Y", "xy"), ("Z", "xz")]);
        assert_eq!(graph.children(&"Y"), vec![("Z", "yz")]);
        assert_eq!(graph.payload(&"X"), Some(&24));
        assert_eq!(graph.root_nodes(), vec!["R"]);
        assert_eq!(graph.selected_node(), Ok(&"X"));
    }

    #[test]
    fn test_attach_is_a_copy() {
        let mut graph: Graph = DirectedGraph::with_root("R");
        let mut sub = create_subgraph();
        graph.attach("R", &sub, "link").unwrap();

        if let Some(payload) = sub.payload_mut(&"X") {
            *payload = -1;
        }
        sub.remove(&"Y");
        assert_eq!(graph.payload(&"X"), Some(&24));
        assert!(graph.has_node(&"Y"));
    }

    #[test]
    fn test_attach_multiple_roots_and_unknown_parent() {
        let mut sub: Graph = DirectedGraph::new();
        sub.add_child("S1", "T", "s1").unwrap();
        sub.add_child("S2", "T", "s2").unwrap();

        let mut graph: Graph = DirectedGraph::new();
        graph.attach("P", &sub, "p").unwrap();
        assert_eq!(graph.children(&"P"), vec![("S1", "p"), ("S2", "p")]);
        assert_eq!(graph.parents(&"T"), vec![("S1", "s1"), ("S2", "s2")]);
        assert_eq!(graph.root_nodes(), vec!["P"]);
        assert!(!graph.has_selected_node());
    }

    #[test]
    fn test_attach_skips_unrooted_components() {
        let mut sub = create_subgraph();
        sub.add_child("C1", "C2", "12").unwrap();
        sub.add_child("C2", "C1", "21").unwrap();
        sub.select(&"C1").unwrap();

        let mut graph: Graph = DirectedGraph::with_root("R");
        graph.attach("R", &sub, "link").unwrap();
        assert!(!graph.has_node(&"C1"));
        assert!(!graph.has_node(&"C2"));
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.children(&"R"), vec![("X", "link")]);
        // The selection pointed into the skipped cycle, so it is not adopted.
        assert_eq!(graph.selected_node(), Ok(&"R"));

        let mut cycle_only: Graph = DirectedGraph::new();
        cycle_only.add_child("C1", "C2", "12").unwrap();
        cycle_only.add_child("C2", "C1", "21").unwrap();
        graph.attach("R", &cycle_only, "link").unwrap();
        assert_eq!(graph.size(), 4);
    }

    #[test]
    fn test_attach_long_chain() {
        const NODES: u32 = 20_000;
        let mut sub: DirectedGraph<u32> = DirectedGraph::new();
        for key in 0..NODES {
            sub.insert_node(key, ());
        }
        for key in 0..NODES - 1 {
            sub.add_child(key, key + 1, ()).unwrap();
        }
        assert_eq!(sub.root_nodes(), vec![0]);

        let mut graph: DirectedGraph<u32> = DirectedGraph::with_root(u32::MAX);
        graph.attach(u32::MAX, &sub, ()).unwrap();
        assert_eq!(graph.size(), NODES as usize + 1);
        assert_eq!(graph.edge_count(), NODES as usize);
        assert_eq!(graph.root_nodes(), vec![u32::MAX]);
        assert_eq!(graph.leaf_nodes(), vec![NODES - 1]);
    }

    #[test]
    fn test_attach_rejected_leaves_graph_untouched() {
        let mut graph: Graph = DirectedGraph::with_config(GraphConfig::strict());
        graph.add_child("X", "P", "xp").unwrap();
        let before = graph.clone();

        let sub = create_subgraph();
        let result = graph.attach("P", &sub, "link");
        assert!(matches!(result, Err(Error::CycleRejected { .. })));
        assert_eq!(graph, before);
        assert!(!graph.has_node(&"Y"));
    }

    #[test]
    fn test_append_with_selection() {
        let mut graph: Graph = DirectedGraph::with_root("R");
        graph.append(&create_subgraph(), "link").unwrap();
        assert_eq!(graph.children(&"R"), vec![("X", "link")]);
        assert_eq!(graph.selected_node(), Ok(&"X"));
    }

    #[test]
    fn test_append_to_empty_copies() {
        let mut graph: Graph = DirectedGraph::new();
        let sub = create_subgraph();
        graph.append(&sub, "unused").unwrap();
        assert_eq!(graph, sub);
        assert_eq!(graph.selected_node(), Ok(&"X"));
    }

    #[test]
    fn test_append_to_empty_keeps_config() {
        let mut graph: Graph = DirectedGraph::with_config(GraphConfig::strict());
        graph.append(&create_subgraph(), "unused").unwrap();

        assert_eq!(graph.config(), &GraphConfig::strict());
        assert!(matches!(
            graph.add_child("Z", "X", "zx"),
            Err(Error::CycleRejected { .. })
        ));
        graph.add_child("X", "Y", "again").unwrap();
        assert_eq!(graph.children(&"X"), vec![("Y", "xy"), ("Z", "xz")]);
    }

    #[test]
    fn test_append_without_selection_fails() {
        let mut graph = create_linear_graph();
        let before = graph.clone();
        assert_eq!(
            graph.append(&create_subgraph(), "link"),
            Err(Error::NoSelection("append"))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_replace_with_existing_edge() {
        let mut graph = create_linear_graph();
        graph.replace(&"B", "A", &create_subgraph(), None).unwrap();

        assert!(!graph.has_node(&"B"));
        assert_eq!(graph.children(&"A"), vec![("X", "ab")]);
        assert!(graph.has_node(&"Z"));
        assert_eq!(graph.root_nodes(), vec!["A", "C"]);
    }

    #[test]
    fn test_replace_with_explicit_edge() {
        let mut graph = create_linear_graph();
        graph
            .replace(&"B", "A", &create_subgraph(), Some("new"))
            .unwrap();
        assert_eq!(graph.edge_between(&"A", &"X"), Ok("new"));
    }

    #[test]
    fn test_replace_missing_edge_leaves_graph_untouched() {
        let mut graph = create_linear_graph();
        let before = graph.clone();
        let result = graph.replace(&"C", "A", &create_subgraph(), None);
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(graph, before);
        assert!(graph.has_node(&"C"));
    }

    #[derive(Clone, PartialEq, Eq, Hash)]
    struct Opaque(u32);

    #[test]
    fn test_mutations_without_debug_keys() {
        let mut graph: DirectedGraph<Opaque, u8, u8> = DirectedGraph::with_root(Opaque(0));
        graph.add_child(Opaque(0), Opaque(1), 1).unwrap();
        graph.add_child(Opaque(1), Opaque(2), 2).unwrap();
        graph.add_child(Opaque(2), Opaque(3), 3).unwrap();
        graph.add_child_to_selected(Opaque(4), 4).unwrap();

        let mut sub: DirectedGraph<Opaque, u8, u8> = DirectedGraph::new();
        sub.add_child(Opaque(10), Opaque(11), 10).unwrap();
        graph.attach(Opaque(4), &sub, 40).unwrap();
        graph.append(&sub, 0).unwrap();
        assert!(graph.has_child(&Opaque(0), &Opaque(10)));

        assert_eq!(graph.pluck(&Opaque(1)), Some(0));
        assert!(graph.has_child(&Opaque(0), &Opaque(2)));
        assert_eq!(graph.trim(&Opaque(3)), 1);
        assert_eq!(graph.remove(&Opaque(4)), Some(0));
        graph.replace(&Opaque(2), Opaque(0), &sub, None).unwrap();
        assert!(graph.edge_between(&Opaque(0), &Opaque(2)).is_err());
        assert!(graph.select(&Opaque(99)).is_err());
        assert!(graph.depth_search(&Opaque(0), &Opaque(11)));

        let mut strict: DirectedGraph<Opaque, (), ()> =
            DirectedGraph::with_config(GraphConfig::strict());
        strict.add_child(Opaque(0), Opaque(1), ()).unwrap();
        assert_eq!(
            strict.add_child(Opaque(1), Opaque(0), ()),
            Err(Error::CycleRejected {
                parent: Some(NodeId::new(1)),
                child: Some(NodeId::new(0)),
            })
        );
    }
}
