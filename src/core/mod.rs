pub mod config;
pub mod error;
pub mod types;

pub use config::DishConfig;
pub use error::{PetriError, Result};
pub use types::{Cell, Coord, Generation};
