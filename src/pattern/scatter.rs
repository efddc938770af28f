//! Seeded random fill for sandbox setups

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{PetriError, Result};
use crate::core::types::Cell;
use crate::dish::state::GridState;
use crate::pattern::Pattern;

/// Fraction of in-dish cells to paint with each state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterDensity {
    pub bacteria: f64,
    pub food: f64,
    pub antibiotics: f64,
}

impl Default for ScatterDensity {
    fn default() -> Self {
        Self {
            bacteria: 0.05,
            food: 0.30,
            antibiotics: 0.02,
        }
    }
}

impl ScatterDensity {
    pub fn validate(&self) -> Result<()> {
        let parts = [self.bacteria, self.food, self.antibiotics];
        if parts.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(PetriError::Config(format!(
                "scatter densities must lie in [0, 1], got {:?}",
                parts
            )));
        }
        let total: f64 = parts.iter().sum();
        if total > 1.0 {
            return Err(PetriError::Config(format!(
                "scatter densities sum to {:.3}, above 1",
                total
            )));
        }
        Ok(())
    }

    fn pick(&self, roll: f64) -> Cell {
        if roll < self.bacteria {
            Cell::Bacteria
        } else if roll < self.bacteria + self.food {
            Cell::Food
        } else if roll < self.bacteria + self.food + self.antibiotics {
            Cell::Antibiotic
        } else {
            Cell::Empty
        }
    }
}

impl Pattern {
    /// Random pattern over the dish of a `width x height` grid
    ///
    /// One draw per in-dish cell in row-major order, so the same seed
    /// always yields the same pattern.
    pub fn scatter(width: usize, height: usize, density: &ScatterDensity, seed: u64) -> Result<Self> {
        density.validate()?;
        let mut grid = GridState::new(width, height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if !grid.in_dish(x, y) {
                    continue;
                }
                let cell = density.pick(rng.gen::<f64>());
                if !cell.is_empty() {
                    grid.set_cell(x, y, cell)?;
                }
            }
        }

        Ok(Pattern::capture(&grid))
    }
}
