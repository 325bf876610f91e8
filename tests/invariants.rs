//! Property-based tests for the structural invariants of `DirectedGraph`.
//!
//! Random graphs are built from a script of mutations over a small key space, so
//! that parallel edges, self-loops, cycles and removals of connected nodes all occur
//! frequently. After every script the adjacency relations, the root set and the
//! selection are checked against each other.

use std::collections::HashSet;

use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, prop_oneof, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use rootgraph::{DirectedGraph, GraphConfig};

const PROP_CASES: u32 = 256;
const KEY_SPACE: u8 = 12;

type Graph = DirectedGraph<u8, (), u8>;

#[derive(Debug, Clone)]
enum Op {
    AddChild(u8, u8, u8),
    Remove(u8),
    Pluck(u8),
    Trim(u8),
    Select(u8),
}

fn key_strategy() -> impl Strategy<Value = u8> {
    0..KEY_SPACE
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (key_strategy(), key_strategy(), any::<u8>()).prop_map(|(p, c, e)| Op::AddChild(p, c, e)),
        1 => key_strategy().prop_map(Op::Remove),
        1 => key_strategy().prop_map(Op::Pluck),
        1 => key_strategy().prop_map(Op::Trim),
        1 => key_strategy().prop_map(Op::Select),
    ]
}

fn apply(graph: &mut Graph, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::AddChild(p, c, e) => {
                // Rejections under a strict config are expected and leave the graph as is.
                let _ = graph.add_child(p, c, e);
            }
            Op::Remove(k) => {
                graph.remove(&k);
            }
            Op::Pluck(k) => {
                graph.pluck(&k);
            }
            Op::Trim(k) => {
                graph.trim(&k);
            }
            Op::Select(k) => {
                let _ = graph.select(&k);
            }
        }
    }
}

/// Checks bidirectional consistency, absence of dangling keys, root derivation and
/// selection validity.
fn check_invariants(graph: &Graph) -> Result<(), proptest::test_runner::TestCaseError> {
    let keys: Vec<u8> = graph.keys().copied().collect();
    let key_set: HashSet<u8> = keys.iter().copied().collect();
    prop_assert_eq!(keys.len(), graph.size());
    prop_assert_eq!(key_set.len(), graph.size());

    let mut edges = 0;
    for &parent in &keys {
        let children = graph.children(&parent);
        edges += children.len();
        for (child, edge) in &children {
            prop_assert!(key_set.contains(child));
            let forward = children.iter().filter(|entry| *entry == &(*child, *edge)).count();
            let backward = graph
                .parents(child)
                .iter()
                .filter(|entry| **entry == (parent, *edge))
                .count();
            prop_assert_eq!(forward, backward);
        }
    }
    prop_assert_eq!(edges, graph.edge_count());

    let roots: HashSet<u8> = graph.root_nodes().into_iter().collect();
    for &key in &keys {
        let parents = graph.parents(&key);
        for (parent, _) in &parents {
            prop_assert!(key_set.contains(parent));
        }
        prop_assert_eq!(roots.contains(&key), parents.is_empty());
    }

    if let Ok(selected) = graph.selected_node() {
        prop_assert!(graph.has_node(selected));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_mutations_preserve_invariants(ops in vec(op_strategy(), 0..64)) {
        let mut graph = Graph::with_root(0);
        apply(&mut graph, &ops);
        check_invariants(&graph)?;
    }

    #[test]
    fn prop_strict_config_never_cycles(ops in vec(op_strategy(), 0..64)) {
        let mut graph = Graph::with_config(GraphConfig::strict());
        apply(&mut graph, &ops);
        check_invariants(&graph)?;
        prop_assert!(!graph.is_cyclic());

        for key in graph.keys() {
            let children = graph.children(key);
            let distinct: HashSet<u8> = children.iter().map(|(c, _)| *c).collect();
            prop_assert_eq!(distinct.len(), children.len());
        }
    }

    #[test]
    fn prop_searches_terminate_and_agree(ops in vec(op_strategy(), 0..64), seed in key_strategy(), target in key_strategy()) {
        let mut graph = Graph::new();
        apply(&mut graph, &ops);

        let depth = graph.depth_search(&seed, &target);
        let breadth = graph.breadth_search(&seed, &target);
        prop_assert_eq!(depth, breadth);

        let path = graph.find_path(&seed, &target);
        prop_assert_eq!(path.is_some(), depth || (seed == target && graph.has_node(&seed)));
        if let Some(path) = path {
            prop_assert_eq!(path.first(), Some(&seed));
            prop_assert_eq!(path.last(), Some(&target));
            for pair in path.windows(2) {
                prop_assert!(graph.has_child(&pair[0], &pair[1]));
            }
        }
    }

    #[test]
    fn prop_pluck_preserves_reachability(ops in vec(op_strategy(), 0..48), victim in key_strategy()) {
        let mut graph = Graph::new();
        apply(&mut graph, &ops);

        let survivors: Vec<u8> = graph.keys().copied().filter(|k| *k != victim).collect();
        let before: Vec<(u8, u8)> = survivors
            .iter()
            .flat_map(|&a| survivors.iter().map(move |&b| (a, b)))
            .filter(|(a, b)| graph.depth_search(a, b))
            .collect();

        graph.pluck(&victim);
        prop_assert!(!graph.has_node(&victim));
        check_invariants(&graph)?;

        for (a, b) in before {
            prop_assert!(graph.depth_search(&a, &b));
        }
    }

    #[test]
    fn prop_trim_removes_reachable_set(ops in vec(op_strategy(), 0..48), victim in key_strategy()) {
        let mut graph = Graph::new();
        apply(&mut graph, &ops);

        let doomed: HashSet<u8> = graph
            .keys()
            .copied()
            .filter(|k| *k == victim || graph.depth_search(&victim, k))
            .filter(|k| graph.has_node(&victim) && graph.has_node(k))
            .collect();
        let size = graph.size();

        prop_assert_eq!(graph.trim(&victim), doomed.len());
        prop_assert_eq!(graph.size(), size - doomed.len());
        for key in &doomed {
            prop_assert!(!graph.has_node(key));
        }
        check_invariants(&graph)?;
    }

    #[test]
    fn prop_equality_is_order_independent(ops in vec(op_strategy(), 0..48)) {
        let mut graph = Graph::new();
        apply(&mut graph, &ops);

        let mut rebuilt = Graph::new();
        let keys: Vec<u8> = graph.keys().copied().collect();
        for key in keys.iter().rev() {
            rebuilt.insert_node(*key, ());
        }
        for parent in keys.iter().rev() {
            for (child, edge) in graph.children(parent).into_iter().rev() {
                rebuilt.add_child(*parent, child, edge).unwrap();
            }
        }
        prop_assert!(graph == rebuilt);
    }
}
