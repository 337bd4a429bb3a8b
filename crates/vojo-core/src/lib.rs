//! # vojo-core
//!
//! Core layer for vojo: the graph store and the classical algorithm suite.
//!
//! This crate provides an in-memory adjacency-list graph plus traversal,
//! connectivity, ordering, spanning-tree, and shortest-path algorithms over
//! it. It depends only on `vojo-common`.
//!
//! ## Modules
//!
//! - [`graph`] - The shared graph store ([`Graph`], [`Edge`])
//! - [`algo`] - The algorithm suite (BFS/DFS, union-find, topological sort,
//!   SCC, MST, Dijkstra/Bellman-Ford/Floyd-Warshall/Johnson, A*)
//!
//! Graphs are built once through edge insertion and then treated as frozen:
//! no algorithm mutates the store, and all working state (visited arrays,
//! frontiers, distance tables) is owned by the call. A single store can
//! therefore back any number of sequential queries, or concurrent ones if
//! shared read-only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algo;
pub mod graph;

// Re-export commonly used types
pub use graph::{Edge, Graph, Neighbor};
