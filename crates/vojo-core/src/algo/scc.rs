//! Strongly connected components via Kosaraju's algorithm.
//!
//! Three phases: (1) a full DFS sweep of the original graph recording
//! finish order, (2) transposition of every edge, (3) collection sweeps
//! over the transpose, seeded in decreasing finish time. Processing the
//! transpose in that order guarantees each sweep captures exactly one SCC
//! and never leaks into another.

use vojo_common::VertexId;

use crate::graph::Graph;

use super::traversal::dfs_postorder;

/// Finds all strongly connected components.
///
/// Components are returned in reverse topological order of the condensation
/// (the order Kosaraju's collection phase discovers them); vertices within a
/// component are in discovery order. On an undirected graph every connected
/// component is trivially strongly connected.
#[must_use]
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    // Phase 1: finish order on the original graph
    let finish_order = dfs_postorder(graph);

    // Phase 2: reverse every edge
    let transposed = graph.transpose();

    // Phase 3: sweep the transpose in decreasing finish time
    let mut visited = vec![false; graph.vertex_count()];
    let mut components = Vec::new();

    for &seed in finish_order.iter().rev() {
        if visited[seed.index()] {
            continue;
        }
        components.push(collect_component(&transposed, seed, &mut visited));
    }

    components
}

/// Number of strongly connected components.
#[must_use]
pub fn strongly_connected_component_count(graph: &Graph) -> usize {
    strongly_connected_components(graph).len()
}

/// Gathers every vertex reachable from `seed` in the transposed graph.
fn collect_component(
    transposed: &Graph,
    seed: VertexId,
    visited: &mut [bool],
) -> Vec<VertexId> {
    let mut component = Vec::new();
    let mut stack = vec![seed];

    while let Some(vertex) = stack.pop() {
        if visited[vertex.index()] {
            continue;
        }
        visited[vertex.index()] = true;
        component.push(vertex);

        for n in transposed.neighbors(vertex) {
            if !visited[n.target.index()] {
                stack.push(n.target);
            }
        }
    }

    component
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn sorted_components(graph: &Graph) -> Vec<Vec<usize>> {
        let mut components: Vec<Vec<usize>> = strongly_connected_components(graph)
            .into_iter()
            .map(|component| {
                let mut indices: Vec<usize> = component.iter().map(|v| v.index()).collect();
                indices.sort_unstable();
                indices
            })
            .collect();
        components.sort();
        components
    }

    #[test]
    fn test_scc_basic() {
        // 0 -> 2 -> 1 -> 0 forms one SCC; 0 -> 3 -> 4 are singletons
        let mut graph = Graph::new(5, true);
        graph.add_edge(v(0), v(2)).unwrap();
        graph.add_edge(v(2), v(1)).unwrap();
        graph.add_edge(v(1), v(0)).unwrap();
        graph.add_edge(v(0), v(3)).unwrap();
        graph.add_edge(v(3), v(4)).unwrap();

        assert_eq!(
            sorted_components(&graph),
            vec![vec![0, 1, 2], vec![3], vec![4]]
        );
    }

    #[test]
    fn test_scc_two_cycles_with_bridge() {
        // 0 <-> 1 and 2 <-> 3, bridged by 1 -> 2
        let mut graph = Graph::new(4, true);
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(0)).unwrap();
        graph.add_edge(v(2), v(3)).unwrap();
        graph.add_edge(v(3), v(2)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();

        assert_eq!(sorted_components(&graph), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(strongly_connected_component_count(&graph), 2);
    }

    #[test]
    fn test_scc_acyclic_graph_is_all_singletons() {
        let mut graph = Graph::new(4, true);
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();
        graph.add_edge(v(2), v(3)).unwrap();

        assert_eq!(strongly_connected_component_count(&graph), 4);
    }

    #[test]
    fn test_scc_single_cycle_covers_graph() {
        let mut graph = Graph::new(3, true);
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();
        graph.add_edge(v(2), v(0)).unwrap();

        assert_eq!(sorted_components(&graph), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_scc_components_partition_vertex_set() {
        let mut graph = Graph::new(7, true);
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(0)).unwrap();
        graph.add_edge(v(2), v(3)).unwrap();
        graph.add_edge(v(5), v(6)).unwrap();
        graph.add_edge(v(6), v(5)).unwrap();

        let components = strongly_connected_components(&graph);
        let mut all: Vec<usize> = components
            .iter()
            .flatten()
            .map(|vertex| vertex.index())
            .collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_scc_undirected_equals_connected_components() {
        let mut graph = Graph::new(4, false);
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(2), v(3)).unwrap();

        assert_eq!(sorted_components(&graph), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph = Graph::new(0, true);
        assert!(strongly_connected_components(&graph).is_empty());
    }
}
