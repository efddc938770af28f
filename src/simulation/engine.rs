//! Step engine - advances the dish one synchronous generation at a time
//!
//! Every in-dish cell's next state is computed from the pre-step grid
//! only, written into the scratch buffer, and published with a single
//! buffer swap. Large grids are evaluated row-parallel with rayon; rows
//! of the scratch buffer are disjoint and the current buffer is read-only,
//! so the result is identical to sequential evaluation.

use std::sync::mpsc;
use std::time::Duration;

use rayon::prelude::*;

use crate::core::config::DishConfig;
use crate::core::error::{PetriError, Result};
use crate::core::types::{Cell, Generation};
use crate::dish::census::Census;
use crate::dish::mask::DishMask;
use crate::dish::state::{moore_counts, GridState};
use crate::pattern::{Pattern, PatternLoad};
use crate::simulation::events::{EngineEvent, Listener};
use crate::simulation::rules::{RuleTable, TransitionRule};

/// Whether the engine is auto-stepping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    /// Editing allowed, no periodic steps
    #[default]
    Idle,
    /// Editing locked, `advance` performs periodic steps
    Running,
}

pub struct SimulationEngine<R: TransitionRule = RuleTable> {
    grid: GridState,
    rule: R,
    run_state: RunState,
    generation: Generation,
    auto_step_interval: Duration,
    /// Time accumulated toward the next automatic step
    pending: Duration,
    max_catch_up_steps: usize,
    parallel_threshold: usize,
    listeners: Vec<Listener>,
}

impl SimulationEngine<RuleTable> {
    /// Engine with the default rule table
    pub fn new(grid: GridState) -> Self {
        Self::with_rule(grid, RuleTable::default())
    }

    /// Empty dish and engine settings from a validated config
    pub fn from_config(config: &DishConfig) -> Result<Self> {
        config.validate()?;
        let grid = GridState::new(config.width, config.height)?;
        Ok(Self::with_rule(grid, config.rules.clone())
            .with_auto_step_interval(config.auto_step_interval())
            .with_max_catch_up_steps(config.max_catch_up_steps)
            .with_parallel_threshold(config.parallel_threshold))
    }
}

impl<R: TransitionRule> SimulationEngine<R> {
    pub fn with_rule(grid: GridState, rule: R) -> Self {
        let defaults = DishConfig::default();
        Self {
            grid,
            rule,
            run_state: RunState::Idle,
            generation: 0,
            auto_step_interval: defaults.auto_step_interval(),
            pending: Duration::ZERO,
            max_catch_up_steps: defaults.max_catch_up_steps,
            parallel_threshold: defaults.parallel_threshold,
            listeners: Vec::new(),
        }
    }

    /// Clamped to at least one millisecond
    pub fn with_auto_step_interval(mut self, interval: Duration) -> Self {
        self.auto_step_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Clamped to at least one step
    pub fn with_max_catch_up_steps(mut self, steps: usize) -> Self {
        self.max_catch_up_steps = steps.max(1);
        self
    }

    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    // === OBSERVATION ===

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn auto_step_interval(&self) -> Duration {
        self.auto_step_interval
    }

    /// Register a callback; listeners fire in registration order
    pub fn subscribe(&mut self, listener: impl FnMut(&EngineEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Receive every future event over a channel
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<EngineEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribe(move |event| {
            // Receiver dropped: the subscriber lost interest
            let _ = tx.send(event.clone());
        });
        rx
    }

    fn emit(&mut self, event: EngineEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    // === STATE MACHINE ===

    /// Idle -> Running; locks editing
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.run_state = RunState::Running;
        self.pending = Duration::ZERO;
        tracing::info!("Simulation started at generation {}", self.generation);
        self.emit(EngineEvent::Started {
            generation: self.generation,
        });
    }

    /// Running -> Idle; unlocks editing. Future steps only, never mid-step.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_state = RunState::Idle;
        self.pending = Duration::ZERO;
        tracing::info!("Simulation stopped at generation {}", self.generation);
        self.emit(EngineEvent::Stopped {
            generation: self.generation,
        });
    }

    /// Feed host-loop time; performs one step per elapsed interval while
    /// Running, at most `max_catch_up_steps` per call. Backlog beyond that
    /// is dropped. Returns the number of steps taken.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.is_running() {
            return 0;
        }
        self.pending = self.pending.saturating_add(elapsed);
        let mut steps = 0;
        while steps < self.max_catch_up_steps && self.pending >= self.auto_step_interval {
            self.pending -= self.auto_step_interval;
            self.step();
            steps += 1;
        }
        if self.pending >= self.auto_step_interval {
            let dropped = self.pending.as_nanos() / self.auto_step_interval.as_nanos();
            tracing::warn!(
                "advance fell behind: ran {} steps, dropped {} more",
                steps,
                dropped
            );
            self.pending = Duration::ZERO;
        }
        steps
    }

    // === EDITING ===

    fn ensure_editable(&self) -> Result<()> {
        if self.is_running() {
            return Err(PetriError::EditingLocked);
        }
        Ok(())
    }

    pub fn set_cell(&mut self, x: i32, y: i32, state: Cell) -> Result<()> {
        self.ensure_editable()?;
        self.grid.set_cell(x, y, state)
    }

    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<PatternLoad> {
        self.ensure_editable()?;
        Ok(pattern.apply(&mut self.grid))
    }

    pub fn save_pattern(&self) -> Pattern {
        Pattern::capture(&self.grid)
    }

    /// Stop if running, empty both buffers, reset the generation counter
    pub fn clear(&mut self) {
        self.stop();
        self.grid.clear();
        self.generation = 0;
        tracing::info!("Dish cleared");
        self.emit(EngineEvent::Cleared);
    }

    // === STEPPING ===

    /// Advance exactly one generation
    ///
    /// # Panics
    ///
    /// If the grid buffers disagree in shape. That can only come from a
    /// construction bug; the engine never resizes to recover.
    pub fn step(&mut self) -> Census {
        if let Err(e) = self.grid.check_shape() {
            panic!("step on malformed grid: {}", e);
        }

        let width = self.grid.width();
        let height = self.grid.height();
        let parallel = self.grid.len() >= self.parallel_threshold;
        {
            let (current, next, mask) = self.grid.step_buffers();
            evaluate(&self.rule, current, next, mask, width, height, parallel);
        }
        self.grid.swap_buffers();
        self.generation += 1;

        let census = self.grid.census();
        tracing::debug!(
            generation = self.generation,
            bacteria = census.bacteria,
            food = census.food,
            antibiotic = census.antibiotic,
            dead = census.dead_bacteria,
            "Step complete"
        );
        self.emit(EngineEvent::StepCompleted {
            generation: self.generation,
            census,
        });
        census
    }

    /// Run `n` manual steps, returning the final census
    pub fn run(&mut self, n: usize) -> Census {
        let mut census = self.grid.census();
        for _ in 0..n {
            census = self.step();
        }
        census
    }
}

/// Compute every cell of `next` from `current`
fn evaluate<R: TransitionRule + ?Sized>(
    rule: &R,
    current: &[Cell],
    next: &mut [Cell],
    mask: &DishMask,
    width: usize,
    height: usize,
    parallel: bool,
) {
    if parallel {
        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evaluate_row(rule, current, row, mask, width, height, y));
    } else {
        next.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evaluate_row(rule, current, row, mask, width, height, y));
    }
}

fn evaluate_row<R: TransitionRule + ?Sized>(
    rule: &R,
    current: &[Cell],
    row: &mut [Cell],
    mask: &DishMask,
    width: usize,
    height: usize,
    y: usize,
) {
    for (x, out) in row.iter_mut().enumerate() {
        let i = y * width + x;
        *out = if mask.contains_index(i) {
            let counts = moore_counts(current, width, height, x as i32, y as i32);
            rule.next_state(current[i], &counts)
        } else {
            Cell::Empty
        };
    }
}
