//! Per-state cell tallies: neighbor histograms and whole-dish census

use serde::{Deserialize, Serialize};

use crate::core::types::Cell;

/// Moore-neighborhood histogram for one cell
///
/// Counts only in-bounds neighbors, so entries sum to at most 8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborCounts([u8; Cell::COUNT]);

impl NeighborCounts {
    #[inline]
    pub fn get(&self, state: Cell) -> usize {
        self.0[state.index()] as usize
    }

    #[inline]
    pub(crate) fn record(&mut self, state: Cell) {
        self.0[state.index()] += 1;
    }

    /// Number of in-bounds neighbors
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }
}

impl<const N: usize> From<[(Cell, u8); N]> for NeighborCounts {
    fn from(entries: [(Cell, u8); N]) -> Self {
        let mut counts = [0u8; Cell::COUNT];
        for (state, n) in entries {
            counts[state.index()] = n;
        }
        Self(counts)
    }
}

/// Totals of each state across the dish
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub empty: usize,
    pub bacteria: usize,
    pub food: usize,
    pub antibiotic: usize,
    pub dead_bacteria: usize,
}

impl Census {
    pub fn tally<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut census = Census::default();
        for &cell in cells {
            census.add(cell);
        }
        census
    }

    pub fn add(&mut self, cell: Cell) {
        match cell {
            Cell::Empty => self.empty += 1,
            Cell::Bacteria => self.bacteria += 1,
            Cell::Food => self.food += 1,
            Cell::Antibiotic => self.antibiotic += 1,
            Cell::DeadBacteria => self.dead_bacteria += 1,
        }
    }

    pub fn get(&self, state: Cell) -> usize {
        match state {
            Cell::Empty => self.empty,
            Cell::Bacteria => self.bacteria,
            Cell::Food => self.food,
            Cell::Antibiotic => self.antibiotic,
            Cell::DeadBacteria => self.dead_bacteria,
        }
    }

    /// Cells in any state other than `Empty`
    pub fn occupied(&self) -> usize {
        self.bacteria + self.food + self.antibiotic + self.dead_bacteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_counts_from_entries() {
        let counts = NeighborCounts::from([(Cell::Food, 3), (Cell::Bacteria, 1)]);
        assert_eq!(counts.get(Cell::Food), 3);
        assert_eq!(counts.get(Cell::Bacteria), 1);
        assert_eq!(counts.get(Cell::Antibiotic), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_census_tally() {
        let cells = [Cell::Empty, Cell::Bacteria, Cell::Bacteria, Cell::DeadBacteria];
        let census = Census::tally(cells.iter());
        assert_eq!(census.get(Cell::Bacteria), 2);
        assert_eq!(census.empty, 1);
        assert_eq!(census.occupied(), 3);
    }
}
