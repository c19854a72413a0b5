//! Bounded rectangular lattice with 4-connected, non-wrapping adjacency.

use cupheat_core::{Coord, GridSpec};
use smallvec::SmallVec;

use crate::error::SpaceError;

/// Flat indices of a cell's in-bounds orthogonal neighbours.
pub type Neighbours = SmallVec<[usize; 4]>;

/// Neighbour offsets in visiting order: north, east, south, west.
const OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// An inclusive `[min_x, max_x] × [min_y, max_y]` lattice.
///
/// Cells are laid out x-major: `index = height * (x - min_x) + (y - min_y)`,
/// so a column of constant `x` is contiguous in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    min_x: i32,
    min_y: i32,
    width: usize,
    height: usize,
}

impl Lattice {
    /// Create a lattice spanning the inclusive coordinate ranges.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either range is empty.
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<Self, SpaceError> {
        if min_x > max_x || min_y > max_y {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self {
            min_x,
            min_y,
            width: (max_x as i64 - min_x as i64 + 1) as usize,
            height: (max_y as i64 - min_y as i64 + 1) as usize,
        })
    }

    /// Create the lattice described by a [`GridSpec`].
    pub fn from_spec(spec: &GridSpec) -> Result<Self, SpaceError> {
        Self::new(spec.min_x, spec.max_x, spec.min_y, spec.max_y)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Smallest x coordinate.
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    /// Largest x coordinate.
    pub fn max_x(&self) -> i32 {
        (self.min_x as i64 + self.width as i64 - 1) as i32
    }

    /// Smallest y coordinate.
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Largest y coordinate.
    pub fn max_y(&self) -> i32 {
        (self.min_y as i64 + self.height as i64 - 1) as i32
    }

    /// Whether `coord` lies within the bounds.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Flat index of `coord`, or `None` outside the bounds.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        let dx = coord.x as i64 - self.min_x as i64;
        let dy = coord.y as i64 - self.min_y as i64;
        if dx < 0 || dy < 0 || dx >= self.width as i64 || dy >= self.height as i64 {
            return None;
        }
        Some(self.height * dx as usize + dy as usize)
    }

    /// Flat index of `coord`, or a descriptive error outside the bounds.
    pub fn try_index(&self, coord: Coord) -> Result<usize, SpaceError> {
        self.index_of(coord)
            .ok_or_else(|| SpaceError::CoordOutOfBounds {
                coord,
                bounds: self.describe(),
            })
    }

    /// Coordinate stored at flat `index`, or `None` past the end.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        let dx = index / self.height;
        let dy = index % self.height;
        Some(Coord::new(
            (self.min_x as i64 + dx as i64) as i32,
            (self.min_y as i64 + dy as i64) as i32,
        ))
    }

    /// In-bounds neighbours of the cell at `index`, in N, E, S, W order.
    ///
    /// Boundary cells return fewer than four entries; nothing wraps.
    pub fn neighbours(&self, index: usize) -> Neighbours {
        let mut result = Neighbours::new();
        let Some(c) = self.coord_of(index) else {
            return result;
        };
        for (dx, dy) in OFFSETS {
            // Off the edge of i32 is off the lattice.
            let (Some(x), Some(y)) = (c.x.checked_add(dx), c.y.checked_add(dy)) else {
                continue;
            };
            if let Some(n) = self.index_of(Coord::new(x, y)) {
                result.push(n);
            }
        }
        result
    }

    /// Precomputed neighbour lists for every cell, indexed by flat index.
    pub fn neighbour_table(&self) -> Vec<Neighbours> {
        (0..self.cell_count()).map(|i| self.neighbours(i)).collect()
    }

    /// All coordinates in flat-index order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).filter_map(move |i| self.coord_of(i))
    }

    fn describe(&self) -> String {
        format!(
            "x in [{}, {}], y in [{}, {}]",
            self.min_x,
            self.max_x(),
            self.min_y,
            self.max_y()
        )
    }
}
