//! Core value types shared across the toolkit.

mod id;

pub use id::VertexId;

/// Signed edge weight.
///
/// Weights are integral; shortest-path relaxation and MST accumulation
/// never round. Negative values are meaningful (Bellman-Ford, Johnson's).
pub type Weight = i64;
