//! The grid model and the maze session coordinator.

pub mod cell;
mod grid;

pub use cell::{Cell, Parent, Point};
pub use grid::Grid;

use crate::error::Error;
use crate::generators::{self, Generator};
use crate::solvers::{self, Solver};

/// One maze session: a grid plus the selected generation and solving
/// strategies. External callers drive the engine entirely through this
/// type: create a session, [`generate`](Maze::generate) once, then solve
/// against the same grid as many times as needed.
pub struct Maze {
    grid: Grid,
    generator: Generator,
    solver: Solver,
}

impl Maze {
    /// Creates a session for an interior of `rows x cols` cells. Odd
    /// dimensions give the cleanest chamber lattice; recursive division
    /// needs at least 3x3 before it can subdivide.
    pub fn new(rows: i32, cols: i32) -> Result<Self, Error> {
        if rows <= 0 || cols <= 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Maze {
            grid: Grid::new(rows, cols),
            generator: Generator::RecurBacktrack,
            solver: Solver::Dfs,
        })
    }

    /// Selects the generation strategy.
    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    /// Selects the solving strategy.
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    /// Read access to the cell states, for rendering or inspection.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entrance(&self) -> Point {
        self.grid.entrance()
    }

    pub fn exit(&self) -> Point {
        self.grid.exit()
    }

    /// Discards any previous maze and carves a fresh one with the selected
    /// generator. Pass a seed for a reproducible layout.
    pub fn generate(&mut self, seed: Option<u64>) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        generators::generate(&mut self.grid, self.generator, seed);
    }

    /// Solves from the entrance to the exit.
    pub fn solve(&mut self) -> Result<Vec<Point>, Error> {
        self.solve_from(self.grid.entrance())
    }

    /// Solves from an arbitrary current position (say, wherever the
    /// traveler is standing) to the exit.
    pub fn solve_from(&mut self, from: Point) -> Result<Vec<Point>, Error> {
        let exit = self.grid.exit();
        solvers::solve(&mut self.grid, from, exit, self.solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Maze::new(0, 5).err(),
            Some(Error::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Maze::new(5, -1).err(),
            Some(Error::InvalidDimensions { rows: 5, cols: -1 })
        );
    }

    #[test]
    fn generate_then_solve_reaches_the_exit() {
        init_tracing();
        let mut maze = Maze::new(9, 9)
            .unwrap()
            .with_generator(Generator::Prim)
            .with_solver(Solver::Bfs);
        maze.generate(Some(11));
        let path = maze.solve().unwrap();
        assert_eq!(path.first(), Some(&maze.entrance()));
        assert_eq!(path.last(), Some(&maze.exit()));
    }

    #[test]
    fn solve_from_an_interior_position() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.generate(Some(3));
        // (1, 1) is a chamber, so every generator leaves it passable.
        let path = maze.solve_from((1, 1)).unwrap();
        assert_eq!(path.first(), Some(&(1, 1)));
        assert_eq!(path.last(), Some(&maze.exit()));
    }

    #[test]
    fn regeneration_resets_the_grid() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze.generate(Some(1));
        let first = maze.grid().passable_points();
        maze.generate(Some(1));
        assert_eq!(maze.grid().passable_points(), first);
        maze.generate(Some(2));
        assert_ne!(maze.grid().passable_points(), first);
    }
}
