//! Error types for the workout tracker.

use thiserror::Error;

/// Rejected form input. Every variant surfaces to the user as the same notice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The field did not coerce to a finite number.
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    /// Distance and duration must be strictly positive.
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Failure reported by a durable key-value backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("failed to read key '{key}': {message}")]
    Read { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to serialize workouts: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A submit arrived before any map click picked a location.
    #[error("no location selected on the map")]
    NoPendingLocation,
}

impl TrackerError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::NotPositive { field: "distance" };
        assert_eq!(err.to_string(), "distance must be greater than zero");

        let err: TrackerError = ValidationError::NotFinite { field: "cadence" }.into();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "invalid input: cadence is not a finite number");
    }

    #[test]
    fn store_error_is_transparent() {
        let err: TrackerError = StoreError::Unavailable("quota exceeded".into()).into();
        assert_eq!(err.to_string(), "storage is unavailable: quota exceeded");
        assert!(!err.is_invalid_input());
    }
}
