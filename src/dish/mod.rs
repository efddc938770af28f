//! The dish: flat double-buffered cell grid inside a circular mask

pub mod census;
pub mod grid;
pub mod mask;
pub mod state;

pub use census::{Census, NeighborCounts};
pub use grid::Grid;
pub use mask::DishMask;
pub use state::{moore_counts, GridState, MOORE_OFFSETS};
