use super::{NEIGHBORS, walk_back};
use crate::error::Error;
use crate::maze::{Grid, Parent, Point};

/// The historical frontier traversal, preserved move for move: every
/// unvisited passable neighbor of the tail is appended to the container
/// and the tail re-appended behind them. The next round re-expands that
/// same tail, finds nothing new, pops it, and resumes from the most
/// recently appended neighbor, so exploration runs depth-biased through
/// the newest branch rather than layer by layer. Callers that want true
/// layer order use the `Bfs` solver instead.
///
/// Unlike the depth-first solver, the result is not the live container
/// but a back-pointer walk from the exit, reversed.
pub fn solve_frontier(grid: &mut Grid, start: Point, exit: Point) -> Result<Vec<Point>, Error> {
    let target = (exit.0 - 1, exit.1);
    grid.reset_parents();
    grid.set_parent(start, Parent::Origin);

    let mut frontier = vec![start];
    let mut current = start;
    while current != target {
        let mut expanded = false;
        for (dx, dy) in NEIGHBORS {
            let next = (current.0 + dx, current.1 + dy);
            if !grid.out_of_border(next)
                && grid.is_passable(next)
                && grid.parent(next) == Parent::Unvisited
            {
                grid.set_parent(next, Parent::Cell(current));
                frontier.push(next);
                expanded = true;
            }
        }
        if expanded {
            frontier.push(current);
        } else {
            frontier.pop();
            match frontier.last() {
                Some(&tail) => current = tail,
                None => {
                    return Err(Error::NoPathFound {
                        from: start,
                        to: exit,
                    });
                }
            }
        }
    }

    grid.set_parent(exit, Parent::Cell(target));
    Ok(walk_back(grid, exit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruction_skips_explored_side_branches() {
        // A T junction: the solver wanders into the spur, but the
        // back-pointer walk only keeps the trunk.
        let mut grid = Grid::new(3, 3);
        for p in [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (1, 2), (1, 3)] {
            grid.set_passable(p, true);
        }
        let path = solve_frontier(&mut grid, (0, 1), (4, 3)).unwrap();
        assert_eq!(
            path,
            vec![(0, 1), (1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (4, 3)]
        );
    }

    #[test]
    fn start_cell_keeps_the_origin_marker() {
        let mut grid = Grid::new(3, 3);
        for p in [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)] {
            grid.set_passable(p, true);
        }
        solve_frontier(&mut grid, (0, 1), (4, 3)).unwrap();
        assert_eq!(grid.parent((0, 1)), Parent::Origin);
        assert_eq!(grid.parent((1, 1)), Parent::Cell((0, 1)));
    }
}
