pub mod engine;
pub mod events;
pub mod rules;

pub use engine::{RunState, SimulationEngine};
pub use events::EngineEvent;
pub use rules::{Condition, RuleTable, Transition, TransitionRule};
