//! Dish configuration with documented defaults
//!
//! Loaded from TOML. Every field is optional in the file; missing fields
//! fall back to the defaults below.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{PetriError, Result};
use crate::simulation::rules::RuleTable;

/// Configuration for a dish and its simulation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishConfig {
    // === GRID ===
    /// Grid width in cells
    pub width: usize,

    /// Grid height in cells
    ///
    /// The dish is the circle inscribed in `min(width, height)`, so a
    /// non-square grid leaves unused strips on the longer axis.
    pub height: usize,

    // === ENGINE ===
    /// Time between automatic steps while the engine is running
    pub auto_step_interval_ms: u64,

    /// Most steps a single `advance` call may run
    ///
    /// When the host falls further behind than this, the excess backlog is
    /// dropped instead of replayed.
    pub max_catch_up_steps: usize,

    /// Minimum cell count before a step is evaluated row-parallel
    ///
    /// Below this, thread overhead exceeds the benefit. Results are
    /// identical either way.
    pub parallel_threshold: usize,

    /// Transition table evaluated for every in-dish cell
    pub rules: RuleTable,
}

impl Default for DishConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            auto_step_interval_ms: 250,
            max_catch_up_steps: 4,
            parallel_threshold: 16_384,
            rules: RuleTable::default(),
        }
    }
}

impl DishConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DishConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded dish config from {:?} ({}x{}, {} rules)",
            path,
            config.width,
            config.height,
            config.rules.len()
        );
        Ok(config)
    }

    pub fn auto_step_interval(&self) -> Duration {
        Duration::from_millis(self.auto_step_interval_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PetriError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if self.auto_step_interval_ms == 0 {
            return Err(PetriError::Config(
                "auto_step_interval_ms must be positive".into(),
            ));
        }

        if self.max_catch_up_steps == 0 {
            return Err(PetriError::Config(
                "max_catch_up_steps must be at least 1".into(),
            ));
        }

        self.rules.validate().map_err(PetriError::Config)
    }
}
