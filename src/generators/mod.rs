//! Maze generation strategies. Each generator mutates a freshly allocated
//! grid in place so that the passable cells form a single spanning tree
//! touching every chamber, plus the entrance and exit seams.

use rand::{Rng, SeedableRng, rngs::StdRng};

mod prim;
mod recur_backtrack;
mod recur_div;

use crate::error::Error;
use crate::maze::{Grid, Point};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Picks a uniformly random chamber cell (both coordinates odd).
fn random_chamber(grid: &Grid, rng: &mut StdRng) -> Point {
    (
        2 * rng.random_range(0..(grid.cols() / 2).max(1)) + 1,
        2 * rng.random_range(0..(grid.rows() / 2).max(1)) + 1,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    Prim,
    RecurDiv,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker (DFS)"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backtrack" | "recur-backtrack" | "dfs" => Ok(Generator::RecurBacktrack),
            "prim" => Ok(Generator::Prim),
            "division" | "recur-div" => Ok(Generator::RecurDiv),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Carves a maze into `grid` using the selected strategy. Passing a seed
/// makes the layout bit-identical across runs.
pub fn generate(grid: &mut Grid, generator: Generator, seed: Option<u64>) {
    tracing::debug!(
        "generating {}x{} maze with {}",
        grid.rows(),
        grid.cols(),
        generator
    );
    let mut rng = get_rng(seed);
    match generator {
        Generator::RecurBacktrack => recur_backtrack::recursive_backtrack(grid, &mut rng),
        Generator::Prim => prim::randomized_prim(grid, &mut rng),
        Generator::RecurDiv => recur_div::recursive_division(grid, &mut rng),
    }
}
