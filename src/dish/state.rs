//! Double-buffered dish grid
//!
//! `GridState` owns the `current` generation that callers read and paint,
//! the `next` scratch buffer the engine writes during a step, and the
//! fixed dish mask. Writes are strict (bounds and mask checked), reads are
//! permissive (anything outside reads as `Empty`).

use crate::core::error::{PetriError, Result};
use crate::core::types::{Cell, Coord};
use crate::dish::census::{Census, NeighborCounts};
use crate::dish::grid::Grid;
use crate::dish::mask::DishMask;

/// Offsets of the 8-connected Moore neighborhood
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    current: Grid<Cell>,
    next: Grid<Cell>,
    mask: DishMask,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PetriError::InvalidShape {
                expected: width.max(1) * height.max(1),
                actual: width * height,
            });
        }
        Ok(Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            mask: DishMask::new(width, height),
        })
    }

    /// Build from a row-major cell buffer
    ///
    /// Cells outside the dish are forced to `Empty`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        let mut state = Self::new(width, height)?;
        let actual = cells.len();
        let mut current = Grid::from_vec(width, height, cells).map_err(|_| PetriError::InvalidShape {
            expected: width * height,
            actual,
        })?;
        for (i, cell) in current.as_mut_slice().iter_mut().enumerate() {
            if !state.mask.contains_index(i) {
                *cell = Cell::Empty;
            }
        }
        state.current = current;
        Ok(state)
    }

    pub fn width(&self) -> usize {
        self.current.width
    }

    pub fn height(&self) -> usize {
        self.current.height
    }

    /// Total cells in the rectangle, dish or not
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn mask(&self) -> &DishMask {
        &self.mask
    }

    /// Inside the rectangular bounds
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.current.index_of(x, y).is_some()
    }

    /// Inside the bounds and the dish mask
    pub fn in_dish(&self, x: i32, y: i32) -> bool {
        self.mask.contains(x, y)
    }

    /// Paint a single cell
    ///
    /// Fails with `OutOfBounds` or `OutsideDish` and leaves the grid
    /// untouched.
    pub fn set_cell(&mut self, x: i32, y: i32, state: Cell) -> Result<()> {
        let Some(index) = self.current.index_of(x, y) else {
            return Err(PetriError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        };
        if !self.mask.contains_index(index) {
            return Err(PetriError::OutsideDish { x, y });
        }
        self.current.as_mut_slice()[index] = state;
        Ok(())
    }

    /// `Empty` for anything outside the grid
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        self.current.get(x, y).copied().unwrap_or_default()
    }

    pub fn neighbor_count(&self, x: i32, y: i32, state: Cell) -> usize {
        self.neighbor_counts(x, y).get(state)
    }

    pub fn neighbor_counts(&self, x: i32, y: i32) -> NeighborCounts {
        moore_counts(self.current.as_slice(), self.width(), self.height(), x, y)
    }

    /// Reset both buffers to `Empty`
    pub fn clear(&mut self) {
        self.current.fill(Cell::Empty);
        self.next.fill(Cell::Empty);
    }

    /// In-dish coordinates holding `state`, ascending x then ascending y
    pub fn cells_with_state(&self, state: Cell) -> Vec<Coord> {
        let (width, height) = (self.width(), self.height());
        let cells = self.current.as_slice();
        let mut found = Vec::new();
        for x in 0..width {
            for y in 0..height {
                let i = y * width + x;
                if cells[i] == state && self.mask.contains_index(i) {
                    found.push(Coord::new(x as i32, y as i32));
                }
            }
        }
        found
    }

    /// Per-state totals over in-dish cells
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for (i, &cell) in self.current.as_slice().iter().enumerate() {
            if self.mask.contains_index(i) {
                census.add(cell);
            }
        }
        census
    }

    /// Row-major view of the current generation
    pub fn cells(&self) -> &[Cell] {
        self.current.as_slice()
    }

    /// Both buffers and the mask must share one shape
    pub fn check_shape(&self) -> Result<()> {
        if !self.current.same_shape(&self.next) {
            return Err(PetriError::InvalidShape {
                expected: self.current.len(),
                actual: self.next.len(),
            });
        }
        if self.mask.width() != self.width() || self.mask.height() != self.height() {
            return Err(PetriError::InvalidShape {
                expected: self.current.len(),
                actual: self.mask.width() * self.mask.height(),
            });
        }
        Ok(())
    }

    /// Read `current`, write `next`, for one step
    pub(crate) fn step_buffers(&mut self) -> (&[Cell], &mut [Cell], &DishMask) {
        (
            self.current.as_slice(),
            self.next.as_mut_slice(),
            &self.mask,
        )
    }

    /// Publish `next` as the current generation
    ///
    /// Handle exchange only; the old `current` becomes scratch.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    #[cfg(test)]
    pub(crate) fn replace_next(&mut self, next: Grid<Cell>) {
        self.next = next;
    }
}

/// Moore histogram of `(x, y)` over a row-major buffer
///
/// Neighbors outside `width x height` are skipped, never wrapped.
pub fn moore_counts(cells: &[Cell], width: usize, height: usize, x: i32, y: i32) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    for (dx, dy) in MOORE_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
            continue;
        }
        counts.record(cells[ny as usize * width + nx as usize]);
    }
    counts
}
