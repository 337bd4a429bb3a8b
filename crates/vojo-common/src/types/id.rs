//! Identifier types for graph elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex in a graph.
///
/// Vertices are dense integer indices in `0..vertex_count`, assigned at
/// graph construction. The newtype keeps vertex identifiers from mixing
/// with the counts, costs, and cursor indices the algorithms juggle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index, suitable for addressing per-vertex arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}
