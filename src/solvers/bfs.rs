use std::collections::VecDeque;

use super::{NEIGHBORS, walk_back};
use crate::error::Error;
use crate::maze::{Grid, Parent, Point};

/// Textbook breadth-first solve over a FIFO queue. On a perfect maze it
/// returns the same unique path as the other solvers; on a grid with
/// cycles it returns a shortest one.
pub fn solve_bfs(grid: &mut Grid, start: Point, exit: Point) -> Result<Vec<Point>, Error> {
    let target = (exit.0 - 1, exit.1);
    grid.reset_parents();
    grid.set_parent(start, Parent::Origin);

    let mut queue = VecDeque::from([start]);
    while let Some((x, y)) = queue.pop_front() {
        if (x, y) == target {
            grid.set_parent(exit, Parent::Cell(target));
            return Ok(walk_back(grid, exit));
        }
        for (dx, dy) in NEIGHBORS {
            let next = (x + dx, y + dy);
            if !grid.out_of_border(next)
                && grid.is_passable(next)
                && grid.parent(next) == Parent::Unvisited
            {
                grid.set_parent(next, Parent::Cell((x, y)));
                queue.push_back(next);
            }
        }
    }
    Err(Error::NoPathFound {
        from: start,
        to: exit,
    })
}
