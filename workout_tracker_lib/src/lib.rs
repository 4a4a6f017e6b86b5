pub mod config;
pub mod error;
pub mod input;
pub mod tracker;
pub mod view;
pub mod workout;

pub use config::TrackerConfig;
pub use error::{ConfigError, LocationError, TrackerError, ValidationError};
pub use input::{FormField, FormFields, ValidatedInput};
pub use tracker::{MapStatus, Tracker, TrackerState};
pub use workout::{Coordinates, Workout, WorkoutId, WorkoutKind, WorkoutType};
