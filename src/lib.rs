// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # rootgraph
//!
//! A generic directed graph keyed by caller-supplied node identities, with
//! configurable depth-first and breadth-first search and structural mutations that
//! keep both adjacency directions and the set of roots consistent.
//!
//! ## Features
//!
//! - **Keyed nodes** - Nodes are addressed by any `Hash + Eq` key; each carries a
//!   payload independent of its identity
//! - **Multi-parent structure** - A node may have any number of parents; parent and
//!   child adjacency are both indexed
//! - **Incremental roots** - Parentless nodes are tracked as they appear and vanish
//! - **One search primitive** - Depth-first and breadth-first traversals, targeted
//!   or exhaustive, with `on_touched` / `on_child` / `on_searched` hooks
//! - **Splice, pluck and trim** - Three removal flavours with well-defined effects
//!   on the remaining structure
//! - **Subgraph attachment** - Copy whole graphs beneath a node
//! - **Policies** - Optionally ignore parallel edges and reject cycles
//!
//! ## Quick Start
//!
//! ```rust
//! use rootgraph::prelude::*;
//!
//! let mut graph: DirectedGraph<u32> = DirectedGraph::with_root(0);
//! graph.add_child(0, 1, ())?;
//! graph.add_child(0, 2, ())?;
//! graph.add_child(1, 10, ())?;
//! graph.add_child(10, 100, ())?;
//!
//! assert_eq!(graph.children(&0), vec![(1, ()), (2, ())]);
//! assert!(graph.targeted_depth_search(&100));
//! assert!(!graph.targeted_depth_search(&999));
//! assert_eq!(graph.root_nodes(), vec![0]);
//!
//! // Removing 1 orphans 10, which becomes a root.
//! graph.remove(&1);
//! assert_eq!(graph.root_nodes(), vec![0, 10]);
//! assert_eq!(graph.children(&0), vec![(2, ())]);
//! # Ok::<(), rootgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Node store, search engine, and the [`DirectedGraph`] façade
//! - [`config`] - [`GraphConfig`] policies for parallel edges and cycles
//! - [`Error`] and [`Result`] - Error handling
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: structural
//! mutations at `debug`, individual search steps at `trace` and rejected cycles at
//! `warn`. It never installs a logger itself.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use rootgraph::prelude::*;
///
/// let graph: DirectedGraph<&str> = DirectedGraph::with_root("root");
/// assert_eq!(graph.selected_node()?, &"root");
/// # Ok::<(), rootgraph::Error>(())
/// ```
pub mod prelude;

/// Graph configuration.
///
/// # Key Types
///
/// - [`config::GraphConfig`] - Policy bundle handed to [`DirectedGraph::with_config`]
/// - [`config::ParallelEdges`] - What happens to repeated edges
/// - [`config::CyclePolicy`] - What happens to cycle-closing edges
pub mod config;

/// Keyed directed graph, storage and search.
///
/// # Key Types
///
/// - [`graph::DirectedGraph`] - The graph callers build and query
/// - [`graph::NodeStore`] - Arena storage with bidirectional adjacency
/// - [`graph::SearchHooks`] - Visitor hooks for traversals
/// - [`graph::Traversal`] - Depth-first or breadth-first order
pub mod graph;

pub use config::{CyclePolicy, GraphConfig, ParallelEdges};
pub use error::{Error, Result};
pub use graph::{DirectedGraph, SearchHooks, Traversal};
