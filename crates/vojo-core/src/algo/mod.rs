//! Graph algorithms for vojo.
//!
//! Every algorithm takes a frozen [`Graph`](crate::graph::Graph) reference
//! and returns a result value; none of them mutate the store, print, or
//! share state across calls.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS, DFS with visitor pattern
//! - [`union_find`] - Disjoint set union, connected components
//! - [`topo`] - Kahn's and DFS-based topological sort
//! - [`scc`] - Strongly connected components (Kosaraju)
//! - [`mst`] - Minimum spanning tree (Kruskal, Prim)
//! - [`shortest_path`] - Dijkstra, Bellman-Ford, Floyd-Warshall, Johnson
//! - [`astar`] - A* search over an obstacle grid
//!
//! ## Usage
//!
//! ```
//! use vojo_core::Graph;
//! use vojo_core::algo::{bfs, dijkstra, kruskal};
//! use vojo_common::VertexId;
//!
//! let mut graph = Graph::new(3, false);
//! graph.add_weighted_edge(VertexId::new(0), VertexId::new(1), 2).unwrap();
//! graph.add_weighted_edge(VertexId::new(1), VertexId::new(2), 3).unwrap();
//!
//! let order = bfs(&graph);
//! let tree = dijkstra(&graph, VertexId::new(0)).unwrap();
//! let mst = kruskal(&graph);
//! assert_eq!(order.len(), 3);
//! assert_eq!(tree.distance(VertexId::new(2)), Some(5));
//! assert_eq!(mst.total_weight, 5);
//! ```

mod traits;
mod traversal;
mod union_find;
mod topo;
mod scc;
mod mst;
mod shortest_path;
mod astar;

// Core support types
pub use traits::{Control, MinScored, TraversalEvent};

// Traversal algorithms
pub use traversal::{
    bfs, bfs_from, bfs_with_visitor, dfs, dfs_from, dfs_postorder, dfs_with_visitor,
};

// Connectivity
pub use union_find::{connected_components, UnionFind, UnionStrategy};

// Ordering
pub use topo::{dfs_topological_sort, is_dag, kahn_topological_sort, TopoSort};

// Strongly connected components
pub use scc::{strongly_connected_component_count, strongly_connected_components};

// Minimum spanning tree
pub use mst::{kruskal, prim, MstResult};

// Shortest paths
pub use shortest_path::{
    bellman_ford, dijkstra, floyd_warshall, johnson, FloydWarshallResult, JohnsonResult,
    ShortestPathTree,
};

// Grid search
pub use astar::{astar, Grid, GridPos};
