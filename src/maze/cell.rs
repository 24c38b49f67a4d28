/// A grid position as `(x, y)`.
pub type Point = (i32, i32);

/// Transient back-pointer recorded per cell during a solve, pointing at
/// the cell it was reached from. Reset grid-wide at the start of every
/// solve call; it carries no meaning outside one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parent {
    /// Not yet reached in the current solve.
    #[default]
    Unvisited,
    /// Sentinel marking the cell the solve started from.
    Origin,
    /// Reached from this neighboring cell.
    Cell(Point),
}

/// A single cell of the lattice: a passability flag plus the per-solve
/// back-pointer scratch state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub passable: bool,
    pub parent: Parent,
}
