//! Integration tests for the dish grid
//!
//! Covers the write/read contract, the dish mask, neighbor counting and
//! deterministic enumeration.

use petri_dish::dish::MOORE_OFFSETS;
use petri_dish::{Cell, Coord, GridState, PetriError};
use proptest::prelude::*;

fn any_cell() -> impl Strategy<Value = Cell> {
    prop::sample::select(Cell::ALL.to_vec())
}

// ============================================================================
// Writes and Reads
// ============================================================================

#[test]
fn test_every_dish_cell_round_trips() {
    let mut grid = GridState::new(24, 18).unwrap();
    for y in 0..18 {
        for x in 0..24 {
            if grid.in_dish(x, y) {
                grid.set_cell(x, y, Cell::Food).unwrap();
                assert_eq!(grid.get_cell(x, y), Cell::Food);
            } else {
                assert!(grid.set_cell(x, y, Cell::Food).is_err());
                assert_eq!(grid.get_cell(x, y), Cell::Empty);
            }
        }
    }
    assert_eq!(grid.census().food, grid.mask().count());
}

#[test]
fn test_error_kind_distinguishes_bounds_and_dish() {
    let mut grid = GridState::new(10, 10).unwrap();
    assert!(matches!(
        grid.set_cell(10, 10, Cell::Bacteria),
        Err(PetriError::OutOfBounds { .. })
    ));
    assert!(matches!(
        grid.set_cell(9, 9, Cell::Bacteria),
        Err(PetriError::OutsideDish { .. })
    ));
    assert!(grid.set_cell(10, 10, Cell::Bacteria).unwrap_err().is_rejected_write());
}

#[test]
fn test_corner_neighbors_at_most_three() {
    let mut grid = GridState::new(7, 7).unwrap();
    for y in 0..7 {
        for x in 0..7 {
            let _ = grid.set_cell(x, y, Cell::Bacteria);
        }
    }
    for (x, y) in [(0, 0), (6, 0), (0, 6), (6, 6)] {
        assert!(grid.neighbor_count(x, y, Cell::Bacteria) <= 3);
        assert_eq!(grid.neighbor_counts(x, y).total(), 3);
    }
}

#[test]
fn test_interior_full_neighborhood() {
    let mut grid = GridState::new(11, 11).unwrap();
    for (dx, dy) in MOORE_OFFSETS {
        grid.set_cell(5 + dx, 5 + dy, Cell::Antibiotic).unwrap();
    }
    grid.set_cell(5, 5, Cell::Antibiotic).unwrap();
    // The cell itself is not its own neighbor
    assert_eq!(grid.neighbor_count(5, 5, Cell::Antibiotic), 8);
}

#[test]
fn test_clear_empties_every_state() {
    let mut grid = GridState::new(16, 16).unwrap();
    grid.set_cell(8, 8, Cell::Bacteria).unwrap();
    grid.set_cell(7, 8, Cell::Food).unwrap();
    grid.set_cell(9, 8, Cell::Antibiotic).unwrap();
    grid.set_cell(8, 9, Cell::DeadBacteria).unwrap();
    grid.clear();
    for state in [Cell::Bacteria, Cell::Food, Cell::Antibiotic, Cell::DeadBacteria] {
        assert!(grid.cells_with_state(state).is_empty());
    }
}

#[test]
fn test_enumeration_is_x_major() {
    let mut grid = GridState::new(16, 16).unwrap();
    let painted = [(9, 4), (6, 10), (6, 7), (8, 8), (9, 3)];
    for (x, y) in painted {
        grid.set_cell(x, y, Cell::Bacteria).unwrap();
    }
    let coords = grid.cells_with_state(Cell::Bacteria);
    let mut expected: Vec<Coord> = painted.iter().map(|&(x, y)| Coord::new(x, y)).collect();
    expected.sort();
    assert_eq!(coords, expected);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_set_then_get_in_dish(x in 0i32..32, y in 0i32..32, cell in any_cell()) {
        let mut grid = GridState::new(32, 32).unwrap();
        prop_assume!(grid.in_dish(x, y));
        grid.set_cell(x, y, cell).unwrap();
        prop_assert_eq!(grid.get_cell(x, y), cell);
    }

    #[test]
    fn prop_rejected_writes_never_mutate(
        x in -40i32..72,
        y in -40i32..72,
        cell in any_cell(),
        seed_cells in prop::collection::vec((0i32..32, 0i32..32, any_cell()), 0..40),
    ) {
        let mut grid = GridState::new(32, 32).unwrap();
        for (sx, sy, sc) in seed_cells {
            let _ = grid.set_cell(sx, sy, sc);
        }
        prop_assume!(!grid.in_dish(x, y));
        let before = grid.clone();
        prop_assert!(grid.set_cell(x, y, cell).is_err());
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn prop_neighbor_histogram_bounded(x in -2i32..14, y in -2i32..14) {
        let grid = GridState::from_cells(12, 12, vec![Cell::Food; 144]).unwrap();
        let counts = grid.neighbor_counts(x, y);
        prop_assert!(counts.total() <= 8);
    }

    #[test]
    fn prop_neighbor_counts_total_at_any_coordinate(x in any::<i32>(), y in any::<i32>()) {
        let grid = GridState::from_cells(12, 12, vec![Cell::Food; 144]).unwrap();
        let counts = grid.neighbor_counts(x, y);
        prop_assert!(counts.total() <= 8);
        prop_assert_eq!(grid.neighbor_count(x, y, Cell::Food), counts.get(Cell::Food));
    }
}
