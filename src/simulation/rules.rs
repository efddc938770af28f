//! Local transition rules
//!
//! A rule maps a cell's own state and its Moore-neighborhood histogram to
//! its state in the next generation. Rules must be pure: the engine
//! evaluates them in any order, possibly on several threads, and expects
//! identical output for identical input.

use serde::{Deserialize, Serialize};

use crate::core::types::Cell;
use crate::dish::census::NeighborCounts;

/// Pure local transition function
pub trait TransitionRule: Sync {
    fn next_state(&self, own: Cell, neighbors: &NeighborCounts) -> Cell;
}

impl<F> TransitionRule for F
where
    F: Fn(Cell, &NeighborCounts) -> Cell + Sync,
{
    fn next_state(&self, own: Cell, neighbors: &NeighborCounts) -> Cell {
        self(own, neighbors)
    }
}

/// Inclusive bound on how many neighbors are in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub neighbor: Cell,
    #[serde(default)]
    pub min: u8,
    /// No upper bound when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
}

impl Condition {
    pub fn at_least(neighbor: Cell, min: u8) -> Self {
        Self {
            neighbor,
            min,
            max: None,
        }
    }

    pub fn between(neighbor: Cell, min: u8, max: u8) -> Self {
        Self {
            neighbor,
            min,
            max: Some(max),
        }
    }

    pub fn holds(&self, neighbors: &NeighborCounts) -> bool {
        let n = neighbors.get(self.neighbor);
        n >= self.min as usize && self.max.map_or(true, |max| n <= max as usize)
    }
}

/// One row of a rule table: `from` becomes `to` when every condition holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Cell,
    pub to: Cell,
    #[serde(default)]
    pub when: Vec<Condition>,
}

impl Transition {
    pub fn new(from: Cell, to: Cell, when: Vec<Condition>) -> Self {
        Self { from, to, when }
    }

    pub fn matches(&self, own: Cell, neighbors: &NeighborCounts) -> bool {
        self.from == own && self.when.iter().all(|c| c.holds(neighbors))
    }
}

/// Ordered transition table; the first matching row wins
///
/// A cell no row matches keeps its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    pub transitions: Vec<Transition>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::petri()
    }
}

impl RuleTable {
    /// Table that never changes anything
    pub fn identity() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Default dish rules
    ///
    /// - Bacteria touching any antibiotic die.
    /// - Food with two or more bacteria neighbors is colonized.
    /// - Empty cells next to three or more bacteria and some food are
    ///   colonized.
    pub fn petri() -> Self {
        Self {
            transitions: vec![
                Transition::new(
                    Cell::Bacteria,
                    Cell::DeadBacteria,
                    vec![Condition::at_least(Cell::Antibiotic, 1)],
                ),
                Transition::new(
                    Cell::Food,
                    Cell::Bacteria,
                    vec![Condition::at_least(Cell::Bacteria, 2)],
                ),
                Transition::new(
                    Cell::Empty,
                    Cell::Bacteria,
                    vec![
                        Condition::at_least(Cell::Bacteria, 3),
                        Condition::at_least(Cell::Food, 1),
                    ],
                ),
            ],
        }
    }

    pub fn with(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (i, t) in self.transitions.iter().enumerate() {
            for c in &t.when {
                if c.min > 8 {
                    return Err(format!(
                        "transition {} ({} -> {}): min {} exceeds 8 neighbors",
                        i, t.from, t.to, c.min
                    ));
                }
                if let Some(max) = c.max {
                    if c.min > max {
                        return Err(format!(
                            "transition {} ({} -> {}): min {} > max {} for {}",
                            i, t.from, t.to, c.min, max, c.neighbor
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl TransitionRule for RuleTable {
    fn next_state(&self, own: Cell, neighbors: &NeighborCounts) -> Cell {
        self.transitions
            .iter()
            .find(|t| t.matches(own, neighbors))
            .map_or(own, |t| t.to)
    }
}
