//! Circular dish mask
//!
//! The playable area is the circle inscribed in the rectangular grid.
//! It is derived once from the grid dimensions and never changes.

use crate::dish::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishMask {
    inside: Grid<bool>,
    count: usize,
}

impl DishMask {
    /// Build the mask for a `width x height` grid
    ///
    /// A cell is inside iff its distance from the center cell
    /// `(width / 2, height / 2)` is at most `min(width, height) / 2 - 1`.
    pub fn new(width: usize, height: usize) -> Self {
        let cx = (width / 2) as f64;
        let cy = (height / 2) as f64;
        let radius = width.min(height) as f64 / 2.0 - 1.0;

        let mut inside = Grid::new(width, height);
        let mut count = 0;
        if radius >= 0.0 {
            let radius_sq = radius * radius;
            for y in 0..height {
                for x in 0..width {
                    let dx = x as f64 - cx;
                    let dy = y as f64 - cy;
                    if dx * dx + dy * dy <= radius_sq {
                        inside.as_mut_slice()[y * width + x] = true;
                        count += 1;
                    }
                }
            }
        }

        Self { inside, count }
    }

    /// False for any coordinate outside the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.inside.get(x, y).copied().unwrap_or(false)
    }

    /// Mask value by flat row-major index
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        self.inside.as_slice().get(index).copied().unwrap_or(false)
    }

    /// Number of cells inside the dish
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> usize {
        self.inside.width
    }

    pub fn height(&self) -> usize {
        self.inside.height
    }
}
