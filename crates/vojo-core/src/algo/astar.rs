//! A* search over a square obstacle grid.
//!
//! The [`Grid`] is the search space: a `size × size` board of cells, each
//! optionally flagged as an obstacle. It is built once and reused across
//! queries; every [`astar`] call owns its own cost, parent, and closed-set
//! scratch.
//!
//! Movement is four-directional (no diagonals), every step costs 1, and the
//! heuristic is Manhattan distance — admissible for this movement model, so
//! the returned path is optimal.

use std::collections::BinaryHeap;

use tracing::debug;
use vojo_common::{Error, Result};

use super::traits::MinScored;

/// A cell coordinate on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl GridPos {
    /// Creates a coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Four-neighbour movement; diagonal cells are not considered.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A square search space with per-cell obstacle flags.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    obstacles: Vec<bool>,
}

impl Grid {
    /// Creates an obstacle-free `size × size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            obstacles: vec![false; size * size],
        }
    }

    /// The grid's side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Flags a cell as an obstacle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `pos` is off the grid.
    pub fn set_obstacle(&mut self, pos: GridPos) -> Result<()> {
        self.check_cell(pos)?;
        let index = self.cell_index(pos);
        self.obstacles[index] = true;
        Ok(())
    }

    /// Whether a cell is flagged as an obstacle. Off-grid positions are not
    /// obstacles (they are simply not cells).
    #[must_use]
    pub fn is_obstacle(&self, pos: GridPos) -> bool {
        self.contains(pos) && self.obstacles[self.cell_index(pos)]
    }

    fn check_cell(&self, pos: GridPos) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: pos.x.max(pos.y),
                limit: self.size,
            })
        }
    }

    fn cell_index(&self, pos: GridPos) -> usize {
        pos.x * self.size + pos.y
    }

    fn cell_pos(&self, index: usize) -> GridPos {
        GridPos::new(index / self.size, index % self.size)
    }
}

/// Manhattan distance between two cells.
fn heuristic(a: GridPos, b: GridPos) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// A* search from `start` to `goal`.
///
/// Maintains an open frontier keyed by `f = g + h` (g = steps from start,
/// h = Manhattan distance to goal) with the same lazy-deletion discipline as
/// Dijkstra: improved cells are re-inserted and stale entries are skipped
/// when popped against the closed set. On reaching the goal the path is
/// rebuilt by walking parent links back to the start and reversing, so it
/// reads start-to-goal. Returns an **empty path** when the frontier drains
/// without reaching the goal — unreachability is an answer, not an error.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when `start` or `goal` is off the grid,
/// [`Error::InvalidStart`] / [`Error::InvalidTarget`] when the respective
/// cell is an obstacle.
pub fn astar(grid: &Grid, start: GridPos, goal: GridPos) -> Result<Vec<GridPos>> {
    grid.check_cell(start)?;
    grid.check_cell(goal)?;
    if grid.is_obstacle(start) {
        return Err(Error::InvalidStart {
            x: start.x,
            y: start.y,
        });
    }
    if grid.is_obstacle(goal) {
        return Err(Error::InvalidTarget {
            x: goal.x,
            y: goal.y,
        });
    }

    let cells = grid.size * grid.size;
    let start_index = grid.cell_index(start);
    let goal_index = grid.cell_index(goal);

    // Per-query scratch; the grid itself is never touched
    let mut g_cost: Vec<Option<usize>> = vec![None; cells];
    let mut parent: Vec<Option<usize>> = vec![None; cells];
    let mut closed = vec![false; cells];

    let mut sequence = 0u64;
    let mut frontier: BinaryHeap<MinScored<(usize, u64), usize>> = BinaryHeap::new();

    g_cost[start_index] = Some(0);
    frontier.push(MinScored((heuristic(start, goal), sequence), start_index));

    while let Some(MinScored(_, cell)) = frontier.pop() {
        if closed[cell] {
            continue; // stale frontier entry
        }
        closed[cell] = true;

        if cell == goal_index {
            return Ok(reconstruct(grid, &parent, cell));
        }

        let pos = grid.cell_pos(cell);
        let Some(g) = g_cost[cell] else { continue };

        for (dx, dy) in DIRECTIONS {
            let Some(x) = pos.x.checked_add_signed(dx) else {
                continue;
            };
            let Some(y) = pos.y.checked_add_signed(dy) else {
                continue;
            };
            let neighbour = GridPos::new(x, y);
            if !grid.contains(neighbour) || grid.is_obstacle(neighbour) {
                continue;
            }

            let neighbour_index = grid.cell_index(neighbour);
            if closed[neighbour_index] {
                continue;
            }

            let tentative = g + 1;
            if g_cost[neighbour_index].map_or(true, |best| tentative < best) {
                g_cost[neighbour_index] = Some(tentative);
                parent[neighbour_index] = Some(cell);
                sequence += 1;
                frontier.push(MinScored(
                    (tentative + heuristic(neighbour, goal), sequence),
                    neighbour_index,
                ));
            }
        }
    }

    debug!(?start, ?goal, "goal unreachable, frontier exhausted");
    Ok(Vec::new())
}

/// Walks parent links back from `cell`, then reverses into start-to-goal
/// order.
fn reconstruct(grid: &Grid, parent: &[Option<usize>], cell: usize) -> Vec<GridPos> {
    let mut path = Vec::new();
    let mut current = Some(cell);
    while let Some(index) = current {
        path.push(grid.cell_pos(index));
        current = parent[index];
    }
    path.reverse();
    path
}
