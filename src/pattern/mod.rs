//! Pattern interchange
//!
//! A pattern lists the coordinates of each paintable state. Loading
//! clears the dish and paints the lists in order; saving enumerates the
//! dish in ascending x, then ascending y, so save/load/save is stable.

pub mod scatter;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Cell, Coord};
use crate::dish::state::GridState;

pub use scatter::ScatterDensity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pattern {
    pub bacteria: Vec<Coord>,
    pub food: Vec<Coord>,
    pub antibiotics: Vec<Coord>,
}

/// Outcome of painting a pattern onto a dish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternLoad {
    /// Coordinates painted
    pub placed: usize,
    /// Coordinates outside the grid or the dish, skipped
    pub rejected: usize,
}

impl Pattern {
    /// Snapshot the dish's paintable states
    pub fn capture(grid: &GridState) -> Self {
        Self {
            bacteria: grid.cells_with_state(Cell::Bacteria),
            food: grid.cells_with_state(Cell::Food),
            antibiotics: grid.cells_with_state(Cell::Antibiotic),
        }
    }

    /// Entries in paint order
    pub fn entries(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.bacteria
            .iter()
            .map(|&c| (c, Cell::Bacteria))
            .chain(self.food.iter().map(|&c| (c, Cell::Food)))
            .chain(self.antibiotics.iter().map(|&c| (c, Cell::Antibiotic)))
    }

    /// Clear the dish, then paint bacteria, food and antibiotics in order
    ///
    /// Coordinates the dish refuses are skipped and counted; later
    /// entries overwrite earlier ones at the same coordinate.
    pub fn apply(&self, grid: &mut GridState) -> PatternLoad {
        grid.clear();
        let mut load = PatternLoad::default();
        for (coord, cell) in self.entries() {
            match grid.set_cell(coord.x, coord.y, cell) {
                Ok(()) => load.placed += 1,
                Err(e) => {
                    tracing::warn!("Skipping {} at ({}, {}): {}", cell, coord.x, coord.y, e);
                    load.rejected += 1;
                }
            }
        }
        tracing::info!(
            "Loaded pattern: {} placed, {} rejected",
            load.placed,
            load.rejected
        );
        load
    }

    pub fn len(&self) -> usize {
        self.bacteria.len() + self.food.len() + self.antibiotics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PetriError;

    #[test]
    fn test_missing_keys_default_empty() {
        let pattern = Pattern::from_json(r#"{ "food": [[3, 4]] }"#).unwrap();
        assert!(pattern.bacteria.is_empty());
        assert!(pattern.antibiotics.is_empty());
        assert_eq!(pattern.food, vec![Coord::new(3, 4)]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Pattern::from_json(r#"{ "viruses": [[1, 1]] }"#).unwrap_err();
        assert!(matches!(err, PetriError::Serde(_)));
    }

    #[test]
    fn test_apply_clears_first() {
        let mut grid = GridState::new(10, 10).unwrap();
        grid.set_cell(5, 5, Cell::DeadBacteria).unwrap();
        let pattern = Pattern {
            food: vec![Coord::new(4, 4)],
            ..Pattern::default()
        };
        let load = pattern.apply(&mut grid);
        assert_eq!(load, PatternLoad { placed: 1, rejected: 0 });
        assert_eq!(grid.get_cell(5, 5), Cell::Empty);
        assert_eq!(grid.get_cell(4, 4), Cell::Food);
    }

    #[test]
    fn test_apply_counts_rejections() {
        let mut grid = GridState::new(10, 10).unwrap();
        let pattern = Pattern {
            bacteria: vec![Coord::new(5, 5), Coord::new(0, 0), Coord::new(-3, 40)],
            ..Pattern::default()
        };
        let load = pattern.apply(&mut grid);
        assert_eq!(load.placed, 1);
        assert_eq!(load.rejected, 2);
    }

    #[test]
    fn test_later_entries_win() {
        let mut grid = GridState::new(10, 10).unwrap();
        let pattern = Pattern {
            bacteria: vec![Coord::new(5, 5)],
            food: vec![],
            antibiotics: vec![Coord::new(5, 5)],
        };
        pattern.apply(&mut grid);
        assert_eq!(grid.get_cell(5, 5), Cell::Antibiotic);
    }

    #[test]
    fn test_capture_ignores_dead_bacteria() {
        let mut grid = GridState::new(10, 10).unwrap();
        grid.set_cell(5, 5, Cell::DeadBacteria).unwrap();
        grid.set_cell(4, 5, Cell::Bacteria).unwrap();
        let pattern = Pattern::capture(&grid);
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.bacteria, vec![Coord::new(4, 5)]);
    }

    #[test]
    fn test_json_shape() {
        let pattern = Pattern {
            bacteria: vec![Coord::new(1, 2)],
            ..Pattern::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&pattern.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["bacteria"][0][0], 1);
        assert_eq!(value["bacteria"][0][1], 2);
        assert!(value["antibiotics"].as_array().unwrap().is_empty());
    }
}
