//! The shared graph store.
//!
//! A [`Graph`] is an adjacency-list representation with a vertex count fixed
//! at construction. Vertices are dense indices `0..vertex_count`; edges are
//! inserted one at a time and bounds-checked. Undirected graphs store both
//! arcs of each logical edge, inserted atomically.
//!
//! Unweighted insertion ([`Graph::add_edge`]) is idempotent: a duplicate arc
//! to the same neighbor is suppressed. Weighted insertion
//! ([`Graph::add_weighted_edge`]) permits parallel edges, because weight
//! matters to the consumers of weighted graphs (MST, shortest paths).

use vojo_common::{Error, Result, VertexId, Weight};

/// One adjacency entry: the far endpoint of an arc and its weight.
///
/// Arcs inserted through [`Graph::add_edge`] carry weight 1 so that
/// unweighted and weighted queries share one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The vertex this arc points at.
    pub target: VertexId,
    /// The arc weight.
    pub weight: Weight,
}

/// A weighted edge as a standalone value.
///
/// Used for edge streams ([`Graph::arcs`], [`Graph::edges`]) and for MST
/// output, where edges exist apart from any adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Tail of the edge.
    pub source: VertexId,
    /// Head of the edge.
    pub destination: VertexId,
    /// Signed weight.
    pub weight: Weight,
}

/// An in-memory adjacency-list graph with a fixed vertex set.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: usize,
    directed: bool,
    adj: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Creates a graph with `vertices` vertices (`0..vertices`) and no edges.
    #[must_use]
    pub fn new(vertices: usize, directed: bool) -> Self {
        Self {
            vertices,
            directed,
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Number of vertices the graph was constructed with.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Whether edges are single arcs (`true`) or mirrored pairs (`false`).
    #[inline]
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `vertex` is a valid index into this graph.
    #[inline]
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: vertex.index(),
                limit: self.vertices,
            })
        }
    }

    /// Iterates every vertex identifier in index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices).map(VertexId::new)
    }

    /// Inserts an unweighted edge (stored with weight 1).
    ///
    /// Insertion is idempotent: an arc that already exists to the same
    /// neighbor is suppressed. On an undirected graph both directions are
    /// inserted as one logical edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when either endpoint is not a valid
    /// vertex; the graph is left unchanged.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        self.insert_unique(source, destination);
        if !self.directed {
            self.insert_unique(destination, source);
        }
        Ok(())
    }

    /// Inserts a weighted edge.
    ///
    /// Parallel edges between the same endpoints are permitted — when weight
    /// matters, a second edge is a distinct object. On an undirected graph
    /// both directions are inserted as one logical edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when either endpoint is not a valid
    /// vertex; the graph is left unchanged.
    pub fn add_weighted_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Weight,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        self.adj[source.index()].push(Neighbor {
            target: destination,
            weight,
        });
        if !self.directed {
            self.adj[destination.index()].push(Neighbor {
                target: source,
                weight,
            });
        }
        Ok(())
    }

    fn insert_unique(&mut self, source: VertexId, target: VertexId) {
        let list = &mut self.adj[source.index()];
        if !list.iter().any(|n| n.target == target) {
            list.push(Neighbor { target, weight: 1 });
        }
    }

    /// The outgoing adjacency of `vertex`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds; use [`Graph::contains_vertex`]
    /// first when the index is untrusted.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        &self.adj[vertex.index()]
    }

    /// Iterates every stored arc.
    ///
    /// On an undirected graph each logical edge yields both of its arcs;
    /// algorithms that relax edges directionally (Bellman-Ford) want exactly
    /// this stream.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj.iter().enumerate().flat_map(|(source, list)| {
            list.iter().map(move |n| Edge {
                source: VertexId::new(source),
                destination: n.target,
                weight: n.weight,
            })
        })
    }

    /// Number of stored arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// The logical edge set, in insertion order per source vertex.
    ///
    /// On a directed graph this is every arc. On an undirected graph the
    /// mirror arcs are deduplicated so each logical edge appears once; a
    /// self-loop contributes two identical arcs and is likewise emitted once.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        if self.directed {
            return self.arcs().collect();
        }

        let mut edges = Vec::new();
        for (source, list) in self.adj.iter().enumerate() {
            let source = VertexId::new(source);
            let mut self_loops = 0usize;
            for n in list {
                if n.target > source {
                    edges.push(Edge {
                        source,
                        destination: n.target,
                        weight: n.weight,
                    });
                } else if n.target == source {
                    // Mirror insertion stores a self-loop twice in the same
                    // list; emit every second occurrence.
                    self_loops += 1;
                    if self_loops % 2 == 0 {
                        edges.push(Edge {
                            source,
                            destination: n.target,
                            weight: n.weight,
                        });
                    }
                }
            }
        }
        edges
    }

    /// Builds the transpose: a graph with every arc reversed.
    ///
    /// The transpose of an undirected graph has the same adjacency; the
    /// operation matters for directed graphs (Kosaraju's second phase).
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut adj = vec![Vec::new(); self.vertices];
        for (source, list) in self.adj.iter().enumerate() {
            for n in list {
                adj[n.target.index()].push(Neighbor {
                    target: VertexId::new(source),
                    weight: n.weight,
                });
            }
        }
        Self {
            vertices: self.vertices,
            directed: self.directed,
            adj,
        }
    }
}
