//! A perfect-maze engine: generation and solving over a bordered
//! rectangular lattice.
//!
//! The grid is a `rows x cols` interior wrapped in an impassable border
//! ring with two carved seams, the entrance at `(0, 1)` and the exit at
//! `(cols + 1, rows)`. Interior cells at odd coordinates are chambers;
//! the even cells between them are removable walls. Three generators
//! carve the passable cells into a spanning tree over the chambers, and
//! three deterministic solvers walk it. A [`Maze`] session ties one grid
//! to a selected generator and solver:
//!
//! ```
//! use mazecore::{Generator, Maze, Solver};
//!
//! let mut maze = Maze::new(9, 9)?
//!     .with_generator(Generator::Prim)
//!     .with_solver(Solver::Bfs);
//! maze.generate(Some(7));
//! let path = maze.solve()?;
//! assert_eq!(path.first(), Some(&maze.entrance()));
//! assert_eq!(path.last(), Some(&maze.exit()));
//! # Ok::<(), mazecore::Error>(())
//! ```

pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::Error;
pub use generators::Generator;
pub use maze::{Cell, Grid, Maze, Parent, Point};
pub use solvers::Solver;
