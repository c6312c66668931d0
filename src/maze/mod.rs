pub mod cell;
mod grid;

pub use cell::GridCell;
use grid::Grid;

use crate::error::{Axis, MazeError, Result};

/// Smallest accepted width or height.
pub const MIN_DIMENSION: u16 = 3;

/// The four carving directions, in the order generators try them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// A rectangular maze on an odd-dimensioned grid.
///
/// Cells whose coordinates are both odd are nodes; the cells between two
/// nodes are connectors that get carved when the nodes are joined.
/// The outer border is never carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    seed: Option<i64>,
}

impl Maze {
    /// Creates an all-wall maze. Even dimensions are bumped to the next odd value.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width < MIN_DIMENSION {
            return Err(MazeError::DimensionTooSmall {
                axis: Axis::Width,
                value: width,
            });
        }
        if height < MIN_DIMENSION {
            return Err(MazeError::DimensionTooSmall {
                axis: Axis::Height,
                value: height,
            });
        }
        // u16::MAX is odd, so the bump never overflows
        let width = width | 1;
        let height = height | 1;
        Ok(Maze {
            grid: Grid::new(width, height, GridCell::Wall),
            seed: None,
        })
    }

    /// Returns the width of the grid in cells, border included.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the grid in cells, border included.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// The seed that drove generation, when one is known.
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub(crate) fn set_seed(&mut self, seed: Option<i64>) {
        self.seed = seed;
    }

    /// Entry coordinate.
    pub fn start(&self) -> (u16, u16) {
        (1, 1)
    }

    /// Exit coordinate.
    pub fn end(&self) -> (u16, u16) {
        (self.width() - 2, self.height() - 2)
    }

    /// Resets every cell to a wall.
    pub fn initialize(&mut self) {
        self.grid.fill(GridCell::Wall);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        self.grid.data()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.grid.rows()
    }

    pub fn is_boundary(&self, coord: (u16, u16)) -> bool {
        self.grid.is_boundary(coord.0, coord.1)
    }

    /// Checks if the coordinate lies strictly inside the border.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width() && coord.1 < self.height() && !self.is_boundary(coord)
    }

    pub fn set(&mut self, coord: (u16, u16), cell: GridCell) {
        self.grid[coord] = cell;
    }

    /// Returns the node two steps away from `coord` in `direction`,
    /// or `None` if it would fall on or outside the border.
    pub fn node_neighbor(&self, coord: (u16, u16), direction: Direction) -> Option<(u16, u16)> {
        let (x, y) = coord;
        // NOTE: This way of handling underflow/overflow is overflow-safe.
        // When x < 2 or y < 2, the subtraction yields None.
        // When x + 2 or y + 2 exceeds u16::MAX, saturate to u16::MAX, which is
        // never in bounds because the largest grid dimension is u16::MAX.
        let neighbor = match direction {
            Direction::Up => (x, y.checked_sub(2)?),
            Direction::Right => (x.saturating_add(2), y),
            Direction::Down => (x, y.saturating_add(2)),
            Direction::Left => (x.checked_sub(2)?, y),
        };
        self.is_in_bounds(neighbor).then_some(neighbor)
    }

    /// Carves a passage from node `from` to node `to`, two cells apart:
    /// the connector between them and `to` itself become paths.
    ///
    /// # Panics
    /// If the two nodes are not exactly two cells apart on one axis.
    pub fn carve_passage(&mut self, from: (u16, u16), to: (u16, u16)) {
        let connector = if from.0 == to.0 {
            assert_eq!(from.1.abs_diff(to.1), 2, "nodes must be two cells apart");
            (from.0, from.1.min(to.1) + 1)
        } else {
            assert_eq!(from.1, to.1, "nodes must share a row or column");
            assert_eq!(from.0.abs_diff(to.0), 2, "nodes must be two cells apart");
            (from.0.min(to.0) + 1, from.1)
        };
        self.grid[connector] = GridCell::Path;
        self.grid[to] = GridCell::Path;
    }

    /// Labels the entry and exit, overwriting their path state.
    pub fn finalize(&mut self) {
        debug_assert_eq!(self[self.start()], GridCell::Path);
        debug_assert_eq!(self[self.end()], GridCell::Path);
        let (start, end) = (self.start(), self.end());
        self.grid[start] = GridCell::Start;
        self.grid[end] = GridCell::End;
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = GridCell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}
