//! Engine notifications

use serde::{Deserialize, Serialize};

use crate::core::types::Generation;
use crate::dish::census::Census;

/// Events emitted by `SimulationEngine` to its listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Engine entered `Running`
    Started { generation: Generation },
    /// Engine returned to `Idle`
    Stopped { generation: Generation },
    /// One generation finished and is now visible in the grid.
    /// Fired exactly once per step, after the buffer swap.
    StepCompleted {
        generation: Generation,
        census: Census,
    },
    /// Both buffers were emptied and the generation counter reset
    Cleared,
}

impl EngineEvent {
    pub fn is_step(&self) -> bool {
        matches!(self, EngineEvent::StepCompleted { .. })
    }
}

/// Registered event callback
pub type Listener = Box<dyn FnMut(&EngineEvent)>;
