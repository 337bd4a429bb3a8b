//! Minimum spanning tree: Kruskal's and Prim's algorithms.
//!
//! Both operate on the graph as-undirected and assume a connected input; on
//! a disconnected graph Kruskal returns the full spanning forest while Prim
//! covers only the seed's component (its frontier simply drains). On the
//! same connected graph they produce trees of equal total weight.

use std::collections::BinaryHeap;

use tracing::debug;
use vojo_common::{VertexId, Weight};

use crate::graph::{Edge, Graph};

use super::traits::MinScored;
use super::union_find::UnionFind;

/// A spanning tree (or forest): the accepted edges and their weight sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: Weight,
}

/// Kruskal's minimum spanning tree.
///
/// Streams the logical edge set in ascending weight (stable sort, so equal
/// weights keep insertion order), testing each edge's endpoints against a
/// union-find: an edge whose endpoints are already connected would close a
/// cycle and is skipped, any other edge is accepted and its endpoints
/// merged. On a directed graph the arcs are simply treated as undirected.
#[must_use]
pub fn kruskal(graph: &Graph) -> MstResult {
    let mut candidates = graph.edges();
    candidates.sort_by_key(|edge| edge.weight);

    let mut dsu = UnionFind::new(graph.vertex_count());
    let mut edges = Vec::new();
    let mut total_weight = 0;

    for edge in candidates {
        // Cycle check: endpoints already in the same tree
        if dsu.is_connected(edge.source, edge.destination) {
            continue;
        }

        dsu.union(edge.source, edge.destination);
        total_weight += edge.weight;
        edges.push(edge);
    }

    debug!(
        edges = edges.len(),
        total_weight, "kruskal spanning tree complete"
    );
    MstResult {
        edges,
        total_weight,
    }
}

/// Prim's minimum spanning tree.
///
/// Grows the tree from vertex 0. The frontier is a lazy-deletion priority
/// queue of candidate edges keyed by `(weight, discovery sequence)`; stale
/// entries whose destination was visited in the meantime are skipped on pop.
/// Terminates once `vertices - 1` edges are accepted or the frontier
/// empties.
#[must_use]
pub fn prim(graph: &Graph) -> MstResult {
    let vertices = graph.vertex_count();
    let mut edges = Vec::new();
    let mut total_weight = 0;

    if vertices == 0 {
        return MstResult {
            edges,
            total_weight,
        };
    }

    let mut visited = vec![false; vertices];
    let mut sequence = 0u64;
    let mut frontier: BinaryHeap<MinScored<(Weight, u64), Edge>> = BinaryHeap::new();

    // Degenerate self-loop seed: pulls vertex 0 into the tree without
    // contributing an edge
    let seed = VertexId::new(0);
    frontier.push(MinScored(
        (0, sequence),
        Edge {
            source: seed,
            destination: seed,
            weight: 0,
        },
    ));

    while edges.len() < vertices - 1 {
        let Some(MinScored(_, edge)) = frontier.pop() else {
            // Disconnected graph: only the seed's component is spanned
            break;
        };

        if visited[edge.destination.index()] {
            continue;
        }
        visited[edge.destination.index()] = true;

        if edge.source != edge.destination {
            total_weight += edge.weight;
            edges.push(edge);
        }

        for n in graph.neighbors(edge.destination) {
            if !visited[n.target.index()] {
                sequence += 1;
                frontier.push(MinScored(
                    (n.weight, sequence),
                    Edge {
                        source: edge.destination,
                        destination: n.target,
                        weight: n.weight,
                    },
                ));
            }
        }
    }

    debug!(
        edges = edges.len(),
        total_weight, "prim spanning tree complete"
    );
    MstResult {
        edges,
        total_weight,
    }
}
