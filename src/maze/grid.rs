use super::cell::{Cell, Parent, Point};

/// A rectangular lattice with a logical interior of `rows x cols` cells,
/// wrapped in a one-cell border ring for total dimensions
/// `(rows + 2) x (cols + 2)`. The ring stays impassable except for two
/// seams carved at allocation time: the entrance at `(0, 1)` and the exit
/// at `(cols + 1, rows)`.
///
/// Interior cells at odd coordinates are chambers; the even cells between
/// them are the removable walls the generators carve through.
pub struct Grid {
    cells: Box<[Cell]>,
    cols: i32,
    rows: i32,
}

impl Grid {
    /// Allocates a grid with the border-and-seam invariant established and
    /// every interior cell still a wall. Dimensions must already be
    /// validated positive by the caller.
    pub fn new(rows: i32, cols: i32) -> Self {
        let cells = vec![Cell::default(); ((rows + 2) * (cols + 2)) as usize].into_boxed_slice();
        let mut grid = Grid { cells, cols, rows };
        let (entrance, exit) = (grid.entrance(), grid.exit());
        grid.set_passable(entrance, true);
        grid.set_passable(exit, true);
        grid
    }

    /// Interior column count.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Interior row count.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// The entrance seam on the west border ring.
    pub fn entrance(&self) -> Point {
        (0, 1)
    }

    /// The exit seam on the east border ring.
    pub fn exit(&self) -> Point {
        (self.cols + 1, self.rows)
    }

    /// The shared boundary predicate: true when `(x, y)` falls outside the
    /// interior `[1, cols] x [1, rows]`, except that the entrance and exit
    /// seams count as inside despite sitting on the border ring. Every
    /// generator and solver must route bounds checks through here so the
    /// seam asymmetry is encoded exactly once.
    pub fn out_of_border(&self, (x, y): Point) -> bool {
        if (x, y) == self.entrance() || (x, y) == self.exit() {
            return false;
        }
        x < 1 || y < 1 || x > self.cols || y > self.rows
    }

    fn ravel_index(&self, (x, y): Point) -> usize {
        (y * (self.cols + 2) + x) as usize
    }

    /// No bounds checking; callers are expected to have gone through
    /// [`Grid::out_of_border`] first.
    pub fn is_passable(&self, p: Point) -> bool {
        self[p].passable
    }

    pub fn set_passable(&mut self, p: Point, passable: bool) {
        let idx = self.ravel_index(p);
        self.cells[idx].passable = passable;
    }

    pub fn parent(&self, p: Point) -> Parent {
        self[p].parent
    }

    pub fn set_parent(&mut self, p: Point, parent: Parent) {
        let idx = self.ravel_index(p);
        self.cells[idx].parent = parent;
    }

    /// Clears every back-pointer. Runs at the start of each solve, since
    /// parents are scratch state left over from the previous call.
    pub fn reset_parents(&mut self) {
        for cell in &mut self.cells {
            cell.parent = Parent::Unvisited;
        }
    }

    /// All passable positions in row-major order, border ring included.
    pub fn passable_points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for y in 0..self.rows + 2 {
            for x in 0..self.cols + 2 {
                if self.is_passable((x, y)) {
                    points.push((x, y));
                }
            }
        }
        points
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = Cell;

    fn index(&self, index: Point) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}
