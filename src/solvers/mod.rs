//! Maze solving strategies. Solvers walk an already generated grid from a
//! start position to the exit seam and return the path as an ordered list
//! of positions. Per-cell back-pointers are scratch state, reset at the
//! start of every call.

mod bfs;
mod dfs;
mod frontier;

use crate::error::Error;
use crate::maze::{Grid, Parent, Point};

/// Fixed neighbor scan order shared by every solver. Solving takes no
/// randomness, so a given grid always yields the same path.
const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    /// The historical frontier traversal. Despite its breadth-first
    /// ancestry it explores depth-first through the most recently touched
    /// branch; kept for behavioral compatibility.
    Frontier,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Frontier => write!(f, "Frontier Search (legacy BFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Solver::Dfs),
            "frontier" => Ok(Solver::Frontier),
            "bfs" => Ok(Solver::Bfs),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Runs the selected solver from `start` to `exit` (the pre-exit interior
/// cell is the actual search target; the exit seam is appended once it is
/// reached).
pub fn solve(
    grid: &mut Grid,
    start: Point,
    exit: Point,
    solver: Solver,
) -> Result<Vec<Point>, Error> {
    let path = match solver {
        Solver::Dfs => dfs::solve_dfs(grid, start, exit),
        Solver::Frontier => frontier::solve_frontier(grid, start, exit),
        Solver::Bfs => bfs::solve_bfs(grid, start, exit),
    }?;
    tracing::debug!(
        "solved {:?} -> {:?} in {} steps with {}",
        start,
        exit,
        path.len(),
        solver
    );
    Ok(path)
}

/// Reconstructs a path by walking back-pointers from `exit` down to the
/// solve origin, then reversing into start-to-exit order.
fn walk_back(grid: &Grid, exit: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = exit;
    while let Parent::Cell(parent) = grid.parent(current) {
        path.push(current);
        current = parent;
    }
    path.push(current);
    path.reverse();
    path
}
