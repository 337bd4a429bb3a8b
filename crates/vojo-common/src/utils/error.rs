//! Error types for the vojo toolkit.
//!
//! Every fallible operation in the toolkit returns [`Result`]. The taxonomy
//! is deliberately small: index validation, A* endpoint validation, and
//! negative-cycle detection. Cyclicity in topological sorting is *not* an
//! error — it is reported as a result value by the sorter itself.

use thiserror::Error;

/// Errors surfaced by graph construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A vertex or cell index is beyond the declared bound.
    ///
    /// Raised by edge insertion, query entry points given a bad source
    /// vertex, and grid operations addressing a cell off the grid.
    #[error("index {index} is out of bounds (limit {limit})")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound the index was checked against.
        limit: usize,
    },

    /// The A* start cell is an obstacle; the search never begins.
    #[error("start cell ({x}, {y}) is defined as an obstacle")]
    InvalidStart {
        /// Row of the start cell.
        x: usize,
        /// Column of the start cell.
        y: usize,
    },

    /// The A* target cell is an obstacle; the search never begins.
    #[error("target cell ({x}, {y}) is defined as an obstacle")]
    InvalidTarget {
        /// Row of the target cell.
        x: usize,
        /// Column of the target cell.
        y: usize,
    },

    /// The graph contains a cycle whose total weight is negative.
    ///
    /// Shortest-path distances are unbounded below in that case, so the
    /// query fails as a whole; no partial distance table is returned.
    #[error("graph contains a negative weight cycle")]
    NegativeCycle,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            index: 9,
            limit: 5,
        };
        assert_eq!(err.to_string(), "index 9 is out of bounds (limit 5)");
    }

    #[test]
    fn test_obstacle_errors_display() {
        let start = Error::InvalidStart { x: 1, y: 2 };
        assert_eq!(
            start.to_string(),
            "start cell (1, 2) is defined as an obstacle"
        );
        let target = Error::InvalidTarget { x: 3, y: 0 };
        assert_eq!(
            target.to_string(),
            "target cell (3, 0) is defined as an obstacle"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(Error::NegativeCycle, Error::NegativeCycle);
        assert_ne!(
            Error::NegativeCycle,
            Error::OutOfRange { index: 0, limit: 0 }
        );
    }
}
