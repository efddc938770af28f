//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// State of a single dish cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Bacteria = 1,
    Food = 2,
    Antibiotic = 3,
    DeadBacteria = 4,
}

impl Cell {
    /// Number of distinct cell states
    pub const COUNT: usize = 5;

    /// Every state in declaration order
    pub const ALL: [Cell; Cell::COUNT] = [
        Cell::Empty,
        Cell::Bacteria,
        Cell::Food,
        Cell::Antibiotic,
        Cell::DeadBacteria,
    ];

    /// Slot of this state in per-state tables (histograms, census)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Bacteria => "bacteria",
            Cell::Food => "food",
            Cell::Antibiotic => "antibiotic",
            Cell::DeadBacteria => "dead_bacteria",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer grid coordinate
///
/// Serialized as a plain `[x, y]` pair so pattern files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// Generation counter (simulation time unit)
pub type Generation = u64;
