//! Text and Graphviz rendering.
//!
//! The [`Display`](fmt::Display) output is meant for logs and test failures:
//!
//! ```text
//! root 0
//! 0 --a--> 1
//! 0 --b--> 2
//! 1 --c--> 10
//! ```
//!
//! Each root starts a `root <key>` line followed by the edges of everything reachable
//! from it, depth-first. Nodes that no root reaches start an `unrooted <key>` line.
//! Every edge is listed exactly once, under the first component that reaches its
//! parent.
//!
//! [`DirectedGraph::to_dot`] produces a Graphviz digraph that `dot -Tsvg` can render.

use std::{
    fmt::{self, Write},
    hash::Hash,
};

use crate::graph::{
    traits::{GraphBase, Successors},
    DirectedGraph, NodeId, NodeStore,
};

/// Escapes a string for use inside a quoted DOT label.
///
/// # Examples
///
/// ```rust
/// use rootgraph::graph::escape_dot;
///
/// assert_eq!(escape_dot("Vec<\"a\">"), "Vec\\<\\\"a\\\"\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Returns the nodes in rendering order, each tagged with whether it starts a new
/// component and, if so, whether that component starts at a root.
fn component_walk<K, V, E>(store: &NodeStore<K, V, E>) -> Vec<(NodeId, Option<bool>)>
where
    K: Hash + Eq,
{
    let mut visited = vec![false; store.node_bound()];
    let mut walk = Vec::with_capacity(store.node_count());

    let seeds: Vec<(NodeId, bool)> = store
        .root_ids()
        .map(|root| (root, true))
        .chain(store.node_ids().map(|node| (node, false)))
        .collect();

    for (seed, is_root) in seeds {
        if visited[seed.index()] {
            continue;
        }
        visited[seed.index()] = true;
        let mut stack = vec![seed];
        let mut header = Some(is_root);

        while let Some(node) = stack.pop() {
            walk.push((node, header.take()));
            let children: Vec<NodeId> = store.successors(node).map(|(c, _)| c).collect();
            for &child in children.iter().rev() {
                if !visited[child.index()] {
                    visited[child.index()] = true;
                    stack.push(child);
                }
            }
        }
    }
    walk
}

impl<K, V, E> fmt::Display for DirectedGraph<K, V, E>
where
    K: Hash + Eq + fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = &self.store;
        for (node, header) in component_walk(store) {
            let Some(key) = store.key(node) else {
                continue;
            };
            match header {
                Some(true) => writeln!(f, "root {key}")?,
                Some(false) => writeln!(f, "unrooted {key}")?,
                None => {}
            }
            for (child, edge) in store.successors(node) {
                if let Some(child_key) = store.key(child) {
                    writeln!(f, "{key} --{edge}--> {child_key}")?;
                }
            }
        }
        Ok(())
    }
}

impl<K, V, E> DirectedGraph<K, V, E>
where
    K: Hash + Eq + fmt::Display,
    E: fmt::Display,
{
    /// Renders the graph in Graphviz DOT format.
    ///
    /// Nodes are labeled with their keys and edges with their payloads. Roots are
    /// filled green and the selected node is drawn with a bold outline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootgraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<&str, (), &str> = DirectedGraph::with_root("main");
    /// graph.add_child("main", "helper", "calls")?;
    ///
    /// let dot = graph.to_dot(Some("calls"));
    /// assert!(dot.starts_with("digraph G {"));
    /// assert!(dot.contains("label=\"calls\""));
    /// # Ok::<(), rootgraph::Error>(())
    /// ```
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        let store = &self.store;
        let mut dot = String::new();

        dot.push_str("digraph G {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=box, fontname=\"Courier\", fontsize=10];\n");
        dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

        for node in store.node_ids() {
            let Some(key) = store.key(node) else {
                continue;
            };
            let mut style = String::new();
            if store.is_root(node) {
                style.push_str(", style=filled, fillcolor=lightgreen");
            }
            if self.selected == Some(node) {
                style.push_str(", penwidth=2");
            }
            let _ = writeln!(
                dot,
                "    {node} [label=\"{}\"{style}];",
                escape_dot(&key.to_string())
            );
        }

        dot.push('\n');

        for node in store.node_ids() {
            for (child, edge) in store.successors(node) {
                let _ = writeln!(
                    dot,
                    "    {node} -> {child} [label=\"{}\"];",
                    escape_dot(&edge.to_string())
                );
            }
        }

        dot.push_str("}\n");
        dot
    }
}
