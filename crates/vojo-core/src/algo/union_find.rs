//! Disjoint set union (union-find) and connected components.

use vojo_common::utils::hash::FxHashMap;
use vojo_common::VertexId;

use crate::graph::Graph;

/// How two roots are merged by [`UnionFind::union`].
///
/// Both strategies give the same near-constant amortized bounds; they differ
/// only in the bookkeeping kept per root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnionStrategy {
    /// Attach the lower-rank root under the higher-rank root, incrementing
    /// rank on ties.
    #[default]
    ByRank,
    /// Attach the smaller set's root under the larger set's root, summing
    /// sizes.
    BySize,
}

/// Union-find over `0..len` with path compression.
///
/// A strictly merging structure: sets can be joined but never split, and no
/// deletions are supported. `find` flattens every traversed vertex onto its
/// root, giving the inverse-Ackermann amortized bound.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    // rank when merging by rank, set size when merging by size
    weight: Vec<usize>,
    strategy: UnionStrategy,
    sets: usize,
}

impl UnionFind {
    /// Creates a union-find of `len` singleton sets, merging by rank.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_strategy(len, UnionStrategy::ByRank)
    }

    /// Creates a union-find of `len` singleton sets with the given merge
    /// strategy.
    #[must_use]
    pub fn with_strategy(len: usize, strategy: UnionStrategy) -> Self {
        let initial_weight = match strategy {
            UnionStrategy::ByRank => 0,
            UnionStrategy::BySize => 1,
        };
        Self {
            parent: (0..len).collect(),
            weight: vec![initial_weight; len],
            strategy,
            sets: len,
        }
    }

    /// Number of elements the structure was created with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure tracks zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative root of `x`'s set.
    ///
    /// Compresses the path in a second pass: every vertex visited on the way
    /// up is re-parented directly onto the root, so repeated queries flatten
    /// the tree without any recursion.
    ///
    /// # Panics
    ///
    /// Panics if `x.index()` is out of bounds.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x.index();
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point everything on the path at the root
        let mut current = x.index();
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        VertexId::new(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` (a no-op) when they are already in the same set.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let x_root = self.find(x).index();
        let y_root = self.find(y).index();

        if x_root == y_root {
            return false;
        }

        match self.strategy {
            UnionStrategy::ByRank => {
                if self.weight[x_root] > self.weight[y_root] {
                    self.parent[y_root] = x_root;
                } else {
                    self.parent[x_root] = y_root;
                    if self.weight[x_root] == self.weight[y_root] {
                        self.weight[y_root] += 1;
                    }
                }
            }
            UnionStrategy::BySize => {
                if self.weight[x_root] > self.weight[y_root] {
                    self.parent[y_root] = x_root;
                    self.weight[x_root] += self.weight[y_root];
                } else {
                    self.parent[x_root] = y_root;
                    self.weight[y_root] += self.weight[x_root];
                }
            }
        }

        self.sets -= 1;
        true
    }

    /// Whether `x` and `y` are in the same set.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn is_connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Groups vertices into connected components, treating every arc as
/// undirected.
///
/// Components are returned in order of their smallest vertex; vertices
/// within a component are in index order.
#[must_use]
pub fn connected_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut dsu = UnionFind::new(graph.vertex_count());
    for edge in graph.arcs() {
        dsu.union(edge.source, edge.destination);
    }

    let mut by_root: FxHashMap<VertexId, Vec<VertexId>> = FxHashMap::default();
    for vertex in graph.vertex_ids() {
        let root = dsu.find(vertex);
        by_root.entry(root).or_default().push(vertex);
    }

    let mut components: Vec<Vec<VertexId>> = by_root.into_values().collect();
    components.sort_by_key(|component| component[0]);
    components
}
