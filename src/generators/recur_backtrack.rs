use rand::{Rng, rngs::StdRng};

use super::random_chamber;
use crate::maze::{Grid, Point};

/// Chamber-to-chamber jumps, scanned cyclically from a random offset.
const JUMPS: [(i32, i32); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Carves a maze by exhaustive randomized backtracking: keep walking to a
/// random unvisited chamber two cells away, opening the wall in between,
/// and pop back once the current chamber has no unvisited neighbor left.
pub fn recursive_backtrack(grid: &mut Grid, rng: &mut StdRng) {
    let start = random_chamber(grid, rng);
    tracing::trace!("backtracker starting at {:?}", start);
    grid.set_passable(start, true);

    let mut stack = vec![start];
    while let Some(&chamber) = stack.last() {
        match carve_step(grid, chamber, rng) {
            Some(next) => stack.push(next),
            None => {
                stack.pop();
            }
        }
    }
}

/// Opens the first still-sealed chamber around `(x, y)`, trying the four
/// jumps in a randomly rotated order, along with the wall cell halfway to
/// it. Returns `None` when every neighbor is already carved.
fn carve_step(grid: &mut Grid, (x, y): Point, rng: &mut StdRng) -> Option<Point> {
    let offset = rng.random_range(0..4usize);
    for i in 0..4 {
        let (dx, dy) = JUMPS[(offset + i) % 4];
        let next = (x + dx, y + dy);
        if !grid.out_of_border(next) && !grid.is_passable(next) {
            grid.set_passable(next, true);
            grid.set_passable((x + dx / 2, y + dy / 2), true);
            return Some(next);
        }
    }
    None
}
