use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetriError {
    #[error("Coordinate ({x}, {y}) outside grid bounds {width}x{height}")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("Coordinate ({x}, {y}) outside the dish")]
    OutsideDish { x: i32, y: i32 },

    #[error("Invalid grid shape: expected {expected} cells, got {actual}")]
    InvalidShape { expected: usize, actual: usize },

    #[error("Grid editing is locked while the simulation is running")]
    EditingLocked,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PetriError {
    /// True for rejected writes the caller can simply ignore
    pub fn is_rejected_write(&self) -> bool {
        matches!(
            self,
            PetriError::OutOfBounds { .. } | PetriError::OutsideDish { .. } | PetriError::EditingLocked
        )
    }
}

pub type Result<T> = std::result::Result<T, PetriError>;
