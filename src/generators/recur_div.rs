use rand::{Rng, rngs::StdRng};

use crate::maze::{Grid, Point};

/// Builds a maze by recursive spatial division. The interior starts fully
/// open (the inverse of the carving generators), then each region is
/// split by a crossing pair of walls, three doors are opened between the
/// four quadrants, and the quadrants are divided in turn. Three doors
/// joining four quadrants keep the region graph a tree.
pub fn recursive_division(grid: &mut Grid, rng: &mut StdRng) {
    for y in 1..=grid.rows() {
        for x in 1..=grid.cols() {
            grid.set_passable((x, y), true);
        }
    }
    divide(grid, (1, 1), grid.rows(), grid.cols(), rng);
}

fn divide(grid: &mut Grid, start: Point, height: i32, width: i32, rng: &mut StdRng) {
    if height <= 2 || width <= 2 {
        return;
    }
    let (x, y) = start;

    // The crossing walls land on even-aligned rows and columns, leaving
    // the chamber lattice intact.
    let wall_y = y + rng.random_range(0..height / 2) * 2 + 1;
    for wx in x..x + width {
        grid.set_passable((wx, wall_y), false);
    }
    let wall_x = x + rng.random_range(0..width / 2) * 2 + 1;
    for wy in y..y + height {
        grid.set_passable((wall_x, wy), false);
    }

    // Wall segments between quadrants, clockwise from the west one. One
    // drawn at random stays closed; the other three each get a door.
    let segments = [
        ((x, wall_y), (wall_x - 1, wall_y)),
        ((wall_x, wall_y + 1), (wall_x, y + height - 1)),
        ((wall_x + 1, wall_y), (x + width - 1, wall_y)),
        ((wall_x, y), (wall_x, wall_y - 1)),
    ];
    let closed = rng.random_range(0..4usize);
    for i in 1..4 {
        let (p1, p2) = segments[(closed + i) % 4];
        open_door(grid, p1, p2, rng);
    }

    let upper = wall_y - y;
    let left = wall_x - x;
    divide(grid, (x, y), upper, left, rng);
    divide(grid, (wall_x + 1, y), upper, width - left - 1, rng);
    divide(grid, (x, wall_y + 1), height - upper - 1, left, rng);
    divide(
        grid,
        (wall_x + 1, wall_y + 1),
        height - upper - 1,
        width - left - 1,
        rng,
    );
}

/// Carves one door at a random odd-aligned position on the axis-aligned
/// wall segment from `p1` to `p2` inclusive, never on the crossing cell.
/// An inverted segment borders an empty quadrant and needs no door.
fn open_door(grid: &mut Grid, p1: Point, p2: Point, rng: &mut StdRng) {
    if p1 == p2 {
        grid.set_passable(p1, true);
    } else if p1.1 == p2.1 {
        if p2.0 > p1.0 {
            let door = p1.0 + rng.random_range(0..(p2.0 - p1.0) / 2) * 2;
            grid.set_passable((door, p1.1), true);
        }
    } else if p2.1 > p1.1 {
        let door = p1.1 + rng.random_range(0..(p2.1 - p1.1) / 2) * 2;
        grid.set_passable((p1.0, door), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn chambers_are_never_walled_off() {
        let mut grid = Grid::new(9, 9);
        let mut rng = StdRng::seed_from_u64(8);
        recursive_division(&mut grid, &mut rng);
        for y in (1..=9).step_by(2) {
            for x in (1..=9).step_by(2) {
                assert!(grid.is_passable((x, y)), "chamber ({x}, {y}) got walled");
            }
        }
    }

    #[test]
    fn smallest_divisible_region_gets_one_closed_door() {
        // On a 3x3 interior the crossing walls are fixed at row and
        // column 2, and every door segment collapses to a single cell.
        let mut grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(4);
        recursive_division(&mut grid, &mut rng);
        assert!(!grid.is_passable((2, 2)), "crossing cell must stay closed");
        let doors = [(1, 2), (2, 3), (3, 2), (2, 1)];
        let open = doors.iter().filter(|&&d| grid.is_passable(d)).count();
        assert_eq!(open, 3);
    }

    #[test]
    fn door_lands_inside_the_segment() {
        let mut grid = Grid::new(9, 9);
        let mut rng = StdRng::seed_from_u64(1);
        for y in 1..=9 {
            for x in 1..=9 {
                grid.set_passable((x, y), true);
            }
        }
        for x in 1..=9 {
            grid.set_passable((x, 4), false);
        }
        open_door(&mut grid, (1, 4), (5, 4), &mut rng);
        let open: Vec<i32> = (1..=9).filter(|&x| grid.is_passable((x, 4))).collect();
        assert_eq!(open.len(), 1);
        assert!(open[0] <= 5 && open[0] % 2 == 1);
    }
}
