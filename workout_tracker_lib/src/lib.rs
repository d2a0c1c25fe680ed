pub mod config;
pub mod coords;
pub mod error;
pub mod form;
pub mod location;
pub mod map;
pub mod notice;
pub mod render;
pub mod storage;
pub mod tracker;
pub mod workout;

pub use coords::Coords;
pub use error::{TrackerError, ValidationError};
pub use tracker::{TrackerController, TrackerState};
pub use workout::{Metric, Workout, WorkoutId, WorkoutKind, WorkoutType};
