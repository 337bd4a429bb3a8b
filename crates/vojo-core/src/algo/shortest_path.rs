//! Shortest path algorithms: Dijkstra, Bellman-Ford, Floyd-Warshall, and
//! Johnson's.
//!
//! | Algorithm      | Scope         | Negative weights | Negative cycles |
//! |----------------|---------------|------------------|-----------------|
//! | Dijkstra       | single-source | forbidden        | not detected    |
//! | Bellman-Ford   | single-source | allowed          | detected, fails |
//! | Floyd-Warshall | all-pairs     | allowed          | undefined       |
//! | Johnson's      | all-pairs     | allowed          | detected, fails |
//!
//! Unreachable vertices carry `None` distances and predecessors — an
//! explicit sentinel, never an error. Relaxation only ever lowers a
//! distance, so every table is monotonically non-increasing while its
//! algorithm runs.

use std::collections::BinaryHeap;

use tracing::debug;
use vojo_common::{Error, Result, VertexId, Weight};

use crate::graph::{Edge, Graph};

use super::traits::MinScored;

// ============================================================================
// Single-Source Results
// ============================================================================

/// Distances and predecessors out of one source vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    fn new(source: VertexId, vertices: usize) -> Self {
        let mut distances = vec![None; vertices];
        distances[source.index()] = Some(0);
        Self {
            source,
            distances,
            predecessors: vec![None; vertices],
        }
    }

    /// The source vertex the tree was computed from.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest known distance to `destination`, `None` when unreached.
    #[must_use]
    pub fn distance(&self, destination: VertexId) -> Option<Weight> {
        self.distances.get(destination.index()).copied().flatten()
    }

    /// Predecessor of `destination` on its shortest path, `None` for the
    /// source and for unreached vertices.
    #[must_use]
    pub fn predecessor(&self, destination: VertexId) -> Option<VertexId> {
        self.predecessors
            .get(destination.index())
            .copied()
            .flatten()
    }

    /// Reconstructs the source-to-destination path.
    ///
    /// Walks the predecessor chain from `destination` back to the source,
    /// then reverses, so the result reads source first. Returns `None` when
    /// `destination` was never reached; the path to the source itself is
    /// `[source]`.
    #[must_use]
    pub fn path_to(&self, destination: VertexId) -> Option<Vec<VertexId>> {
        self.distance(destination)?;

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

// ============================================================================
// Dijkstra
// ============================================================================

/// Dijkstra's single-source shortest paths.
///
/// Repeatedly extracts the unprocessed vertex with the smallest tentative
/// distance from a lazy-deletion binary heap and relaxes its outgoing edges,
/// re-inserting any improved vertex rather than decreasing a key in place;
/// stale heap entries are skipped when popped. The predecessor is recorded
/// on every improvement.
///
/// Negative edge weights are **forbidden** — the result is undefined if any
/// are present. Use [`bellman_ford`] when weights may be negative.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when `source` is not a valid vertex.
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;

    let mut tree = ShortestPathTree::new(source, graph.vertex_count());
    let mut frontier: BinaryHeap<MinScored<Weight, VertexId>> = BinaryHeap::new();
    frontier.push(MinScored(0, source));

    while let Some(MinScored(distance, vertex)) = frontier.pop() {
        // Lazy deletion: drop entries already beaten by a better distance
        match tree.distances[vertex.index()] {
            Some(best) if distance > best => continue,
            _ => {}
        }

        for n in graph.neighbors(vertex) {
            let candidate = distance + n.weight;
            let current = tree.distances[n.target.index()];
            if current.map_or(true, |best| candidate < best) {
                tree.distances[n.target.index()] = Some(candidate);
                tree.predecessors[n.target.index()] = Some(vertex);
                frontier.push(MinScored(candidate, n.target));
            }
        }
    }

    Ok(tree)
}

// ============================================================================
// Bellman-Ford
// ============================================================================

/// Bellman-Ford single-source shortest paths.
///
/// Relaxes every arc `vertices - 1` times — enough for any shortest path of
/// at most `V-1` edges to settle — then makes one more pass: an improvement
/// found there can only mean a cycle of negative total weight, and the call
/// fails rather than return a meaningless table.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when `source` is not a valid vertex, or
/// [`Error::NegativeCycle`] when the graph contains a negative-weight cycle.
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;

    let arcs: Vec<Edge> = graph.arcs().collect();
    let mut tree = ShortestPathTree::new(source, graph.vertex_count());

    for _ in 1..graph.vertex_count() {
        for edge in &arcs {
            if let Some(candidate) = relaxed_distance(&tree, edge) {
                tree.distances[edge.destination.index()] = Some(candidate);
                tree.predecessors[edge.destination.index()] = Some(edge.source);
            }
        }
    }

    // A pass that still improves means distances are unbounded below
    for edge in &arcs {
        if relaxed_distance(&tree, edge).is_some() {
            debug!(
                source = %edge.source,
                destination = %edge.destination,
                "negative cycle witnessed during verification pass"
            );
            return Err(Error::NegativeCycle);
        }
    }

    Ok(tree)
}

/// The improved distance `edge` would give its destination, if any.
fn relaxed_distance(tree: &ShortestPathTree, edge: &Edge) -> Option<Weight> {
    let source_distance = tree.distances[edge.source.index()]?;
    let candidate = source_distance + edge.weight;
    match tree.distances[edge.destination.index()] {
        Some(current) if candidate >= current => None,
        _ => Some(candidate),
    }
}

// ============================================================================
// Floyd-Warshall
// ============================================================================

/// All-pairs distances with `next`-vertex path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloydWarshallResult {
    dist: Vec<Vec<Option<Weight>>>,
    next: Vec<Vec<Option<VertexId>>>,
}

impl FloydWarshallResult {
    /// Shortest distance from `source` to `destination`, `None` when no
    /// path exists.
    #[must_use]
    pub fn distance(&self, source: VertexId, destination: VertexId) -> Option<Weight> {
        self.dist
            .get(source.index())?
            .get(destination.index())
            .copied()
            .flatten()
    }

    /// Reconstructs the source-to-destination path by repeated `next`
    /// lookup. Returns `None` when no path exists; the path from a vertex
    /// to itself is `[vertex]`.
    #[must_use]
    pub fn path(&self, source: VertexId, destination: VertexId) -> Option<Vec<VertexId>> {
        self.distance(source, destination)?;

        let mut path = vec![source];
        let mut current = source;
        while current != destination {
            current = self.next[current.index()][destination.index()]?;
            path.push(current);
        }
        Some(path)
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Seeds a dense `V×V` matrix with direct edges (self-distance zero, absent
/// edge = `None`; parallel arcs seed with their minimum), then for every
/// candidate intermediate vertex `k` replaces `dist[i][j]` whenever the
/// detour `dist[i][k] + dist[k][j]` is strictly smaller, carrying a `next`
/// pointer matrix along for path reconstruction.
///
/// Negative edge weights are allowed; a negative *cycle* makes the
/// result undefined (distances shrink unboundedly) — use [`johnson`] when
/// cycles must be detected.
#[must_use]
pub fn floyd_warshall(graph: &Graph) -> FloydWarshallResult {
    let vertices = graph.vertex_count();
    let mut dist = vec![vec![None; vertices]; vertices];
    let mut next = vec![vec![None; vertices]; vertices];

    for i in 0..vertices {
        dist[i][i] = Some(0);
        next[i][i] = Some(VertexId::new(i));
    }
    for edge in graph.arcs() {
        let (i, j) = (edge.source.index(), edge.destination.index());
        if i == j {
            continue; // self-distance stays zero
        }
        if dist[i][j].map_or(true, |existing| edge.weight < existing) {
            dist[i][j] = Some(edge.weight);
            next[i][j] = Some(edge.destination);
        }
    }

    for k in 0..vertices {
        for i in 0..vertices {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..vertices {
                let Some(kj) = dist[k][j] else { continue };
                let via = ik + kj;
                if dist[i][j].map_or(true, |existing| via < existing) {
                    dist[i][j] = Some(via);
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    FloydWarshallResult { dist, next }
}

// ============================================================================
// Johnson's
// ============================================================================

/// All-pairs shortest paths as one [`ShortestPathTree`] per source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JohnsonResult {
    trees: Vec<ShortestPathTree>,
}

impl JohnsonResult {
    /// The per-source tree rooted at `source`, `None` for a bad index.
    #[must_use]
    pub fn tree(&self, source: VertexId) -> Option<&ShortestPathTree> {
        self.trees.get(source.index())
    }

    /// Shortest distance from `source` to `destination`.
    #[must_use]
    pub fn distance(&self, source: VertexId, destination: VertexId) -> Option<Weight> {
        self.tree(source)?.distance(destination)
    }

    /// Reconstructs the source-to-destination path, `None` when no path
    /// exists.
    #[must_use]
    pub fn path(&self, source: VertexId, destination: VertexId) -> Option<Vec<VertexId>> {
        self.tree(source)?.path_to(destination)
    }
}

/// Johnson's all-pairs shortest paths for sparse graphs.
///
/// A virtual source (index `V`) is wired to every vertex with zero-weight
/// arcs and Bellman-Ford from it yields a potential `h[v]` per vertex —
/// failing fast if a negative cycle exists. Every arc is then re-weighted
/// `w'(u,v) = w(u,v) + h[u] − h[v]`, which is non-negative in a cycle-free
/// graph, so Dijkstra can run from each vertex; final distances are mapped
/// back with `d(u,v) = d'(u,v) − h[u] + h[v]`. Re-weighting preserves which
/// paths are shortest, so the Dijkstra predecessors are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] when the graph contains a
/// negative-weight cycle.
pub fn johnson(graph: &Graph) -> Result<JohnsonResult> {
    let vertices = graph.vertex_count();
    debug!(vertices, "computing all-pairs shortest paths via johnson");

    // Virtual source wired to every vertex at weight zero
    let virtual_source = VertexId::new(vertices);
    let mut augmented = Graph::new(vertices + 1, true);
    for edge in graph.arcs() {
        augmented.add_weighted_edge(edge.source, edge.destination, edge.weight)?;
    }
    for vertex in graph.vertex_ids() {
        augmented.add_weighted_edge(virtual_source, vertex, 0)?;
    }

    let potentials = bellman_ford(&augmented, virtual_source)?;
    // Every vertex is one zero-weight arc from the virtual source, so each
    // potential is present
    let h: Vec<Weight> = graph
        .vertex_ids()
        .map(|v| potentials.distance(v).unwrap_or(0))
        .collect();

    // Re-weight into the non-negative range
    let mut reweighted = Graph::new(vertices, true);
    for edge in graph.arcs() {
        let weight = edge.weight + h[edge.source.index()] - h[edge.destination.index()];
        reweighted.add_weighted_edge(edge.source, edge.destination, weight)?;
    }

    let mut trees = Vec::with_capacity(vertices);
    for source in graph.vertex_ids() {
        let tree = dijkstra(&reweighted, source)?;
        let distances = tree
            .distances
            .iter()
            .enumerate()
            .map(|(v, d)| d.map(|d| d - h[source.index()] + h[v]))
            .collect();
        trees.push(ShortestPathTree {
            source,
            distances,
            predecessors: tree.predecessors,
        });
    }

    Ok(JohnsonResult { trees })
}
