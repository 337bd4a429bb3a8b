//! Topological ordering of directed acyclic graphs.
//!
//! Two independent algorithms: Kahn's in-degree propagation, which reports
//! cyclic input as a result value, and the DFS finish-order variant, which
//! performs no cycle detection at all.

use std::collections::VecDeque;

use vojo_common::VertexId;

use crate::graph::Graph;

use super::traversal::dfs_postorder;

/// Outcome of Kahn's topological sort.
///
/// A cycle is a valid answer to the ordering question, not an error, so it
/// is reported here rather than through [`vojo_common::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopoSort {
    /// Every vertex was placed: the graph is acyclic and this is a valid
    /// topological order.
    Ordered(Vec<VertexId>),
    /// A cycle prevented completion. `processed` holds the vertices that
    /// were ordered before the sort starved — always shorter than the
    /// vertex count.
    CycleDetected {
        /// The partial prefix ordered before the cycle was hit.
        processed: Vec<VertexId>,
    },
}

impl TopoSort {
    /// The complete order, or `None` when a cycle was detected.
    #[must_use]
    pub fn order(&self) -> Option<&[VertexId]> {
        match self {
            Self::Ordered(order) => Some(order),
            Self::CycleDetected { .. } => None,
        }
    }

    /// Whether the sort ran into a cycle.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}

/// Kahn's in-degree topological sort.
///
/// Computes the in-degree of every vertex, seeds a queue with the
/// zero-in-degree vertices, and repeatedly dequeues, appends, and decrements
/// neighbors — enqueuing each neighbor the moment its in-degree reaches
/// zero. If the output is shorter than the vertex count, some vertices never
/// freed up: the graph contains a cycle, and the partial prefix is returned
/// in [`TopoSort::CycleDetected`].
#[must_use]
pub fn kahn_topological_sort(graph: &Graph) -> TopoSort {
    let mut in_degree = vec![0usize; graph.vertex_count()];
    for edge in graph.arcs() {
        in_degree[edge.destination.index()] += 1;
    }

    let mut queue: VecDeque<VertexId> = graph
        .vertex_ids()
        .filter(|v| in_degree[v.index()] == 0)
        .collect();

    let mut sorted = Vec::with_capacity(graph.vertex_count());
    while let Some(vertex) = queue.pop_front() {
        sorted.push(vertex);

        for n in graph.neighbors(vertex) {
            in_degree[n.target.index()] -= 1;
            if in_degree[n.target.index()] == 0 {
                queue.push_back(n.target);
            }
        }
    }

    if sorted.len() == graph.vertex_count() {
        TopoSort::Ordered(sorted)
    } else {
        TopoSort::CycleDetected { processed: sorted }
    }
}

/// DFS-based topological sort (reverse finish order).
///
/// Every vertex is appended once all of its descendants are fully explored;
/// reversing that finish order yields a topological order — *provided the
/// graph is acyclic*. This variant performs **no cycle detection**: on
/// cyclic input it still returns an ordering, but one that is not a true
/// topological order. Use [`kahn_topological_sort`] (which reports cycles)
/// or [`is_dag`] when the input is untrusted.
#[must_use]
pub fn dfs_topological_sort(graph: &Graph) -> Vec<VertexId> {
    let mut order = dfs_postorder(graph);
    order.reverse();
    order
}

/// Whether the graph is a directed acyclic graph.
#[must_use]
pub fn is_dag(graph: &Graph) -> bool {
    !kahn_topological_sort(graph).is_cyclic()
}
