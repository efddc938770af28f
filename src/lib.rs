//! Petri Dish - circular cellular-automaton sandbox core
//!
//! A dish of bacteria, food and antibiotic cells on a flat
//! double-buffered grid, advanced one synchronous generation at a time.

pub mod core;
pub mod dish;
pub mod pattern;
pub mod simulation;

pub use crate::core::{Cell, Coord, DishConfig, PetriError, Result};
pub use crate::dish::{Census, GridState, NeighborCounts};
pub use crate::pattern::{Pattern, PatternLoad, ScatterDensity};
pub use crate::simulation::{EngineEvent, RuleTable, RunState, SimulationEngine, TransitionRule};
