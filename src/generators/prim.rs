use rand::{Rng, rngs::StdRng};

use super::random_chamber;
use crate::maze::{Grid, Point};

const FLANKS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Grows a maze Prim-style from a random chamber: repeatedly draw a
/// uniformly random wall from the frontier and open it when exactly one
/// of its two flanking chambers has been carved already.
pub fn randomized_prim(grid: &mut Grid, rng: &mut StdRng) {
    let start = random_chamber(grid, rng);
    tracing::trace!("prim growth starting at {:?}", start);
    grid.set_passable(start, true);

    let mut frontier = Vec::new();
    push_walls(grid, start, &mut frontier);

    while !frontier.is_empty() {
        let wall = frontier.swap_remove(rng.random_range(0..frontier.len()));
        // A wall whose sides were both carved since it was pushed is moot.
        if let Some(chamber) = sealed_flank(grid, wall) {
            grid.set_passable(wall, true);
            grid.set_passable(chamber, true);
            push_walls(grid, chamber, &mut frontier);
        }
    }
}

/// Adds the still-sealed walls around `(x, y)` to the frontier.
/// Duplicates are tolerated; a stale entry is discarded when drawn.
fn push_walls(grid: &Grid, (x, y): Point, frontier: &mut Vec<Point>) {
    for (dx, dy) in FLANKS {
        let wall = (x + dx, y + dy);
        if !grid.out_of_border(wall) && !grid.is_passable(wall) {
            frontier.push(wall);
        }
    }
}

/// A wall's flanking axis follows its row parity: an odd row puts it
/// between a horizontal chamber pair, an even row a vertical pair.
/// Returns the still-sealed side when exactly one side is carved.
fn sealed_flank(grid: &Grid, (x, y): Point) -> Option<Point> {
    let (dx, dy) = if y % 2 == 1 { (1, 0) } else { (0, 1) };
    let ahead = (x + dx, y + dy);
    let behind = (x - dx, y - dy);
    match (grid.is_passable(ahead), grid.is_passable(behind)) {
        (true, false) => Some(behind),
        (false, true) => Some(ahead),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn carves_every_chamber() {
        let mut grid = Grid::new(9, 7);
        let mut rng = StdRng::seed_from_u64(2);
        randomized_prim(&mut grid, &mut rng);
        for y in (1..=9).step_by(2) {
            for x in (1..=7).step_by(2) {
                assert!(grid.is_passable((x, y)), "chamber ({x}, {y}) stayed sealed");
            }
        }
    }

    #[test]
    fn sealed_flank_picks_the_uncarved_side() {
        let mut grid = Grid::new(5, 5);
        grid.set_passable((1, 1), true);
        // Wall (2, 1) sits between chambers (1, 1) and (3, 1).
        assert_eq!(sealed_flank(&grid, (2, 1)), Some((3, 1)));
        // Wall (1, 2) sits between chambers (1, 1) and (1, 3).
        assert_eq!(sealed_flank(&grid, (1, 2)), Some((1, 3)));
        grid.set_passable((3, 1), true);
        assert_eq!(sealed_flank(&grid, (2, 1)), None);
    }

    #[test]
    fn walls_around_a_chamber_join_the_frontier() {
        let mut grid = Grid::new(5, 5);
        grid.set_passable((3, 3), true);
        let mut frontier = Vec::new();
        push_walls(&grid, (3, 3), &mut frontier);
        assert_eq!(frontier, vec![(2, 3), (3, 4), (4, 3), (3, 2)]);
    }
}
