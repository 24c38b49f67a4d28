use super::NEIGHBORS;
use crate::error::Error;
use crate::maze::{Grid, Parent, Point};

/// Depth-first solve. The path vector doubles as the visitation stack:
/// advancing pushes the next cell, a dead end pops the tail, so the
/// vector left at termination is the start-to-target path itself.
pub fn solve_dfs(grid: &mut Grid, start: Point, exit: Point) -> Result<Vec<Point>, Error> {
    // The search aims for the interior cell just before the exit seam;
    // the seam itself sits outside the normal interior range.
    let target = (exit.0 - 1, exit.1);
    grid.reset_parents();
    grid.set_parent(start, Parent::Origin);

    let mut path = vec![start];
    while let Some(&tail) = path.last() {
        if tail == target {
            grid.set_parent(exit, Parent::Cell(target));
            path.push(exit);
            return Ok(path);
        }
        match advance(grid, tail) {
            Some(next) => path.push(next),
            None => {
                path.pop();
            }
        }
    }
    Err(Error::NoPathFound {
        from: start,
        to: exit,
    })
}

/// First unvisited passable neighbor of `(x, y)` in the fixed scan order,
/// with its back-pointer set on the way out.
fn advance(grid: &mut Grid, (x, y): Point) -> Option<Point> {
    for (dx, dy) in NEIGHBORS {
        let next = (x + dx, y + dy);
        if !grid.out_of_border(next)
            && grid.is_passable(next)
            && grid.parent(next) == Parent::Unvisited
        {
            grid.set_parent(next, Parent::Cell((x, y)));
            return Some(next);
        }
    }
    None
}
