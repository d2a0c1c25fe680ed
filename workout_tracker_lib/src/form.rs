use crate::{
    error::ValidationError,
    workout::{WorkoutKind, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    ElevationGain,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Cadence => "cadence",
            Self::ElevationGain => "elevation gain",
        }
    }
}

/// The workout form as the user is filling it in: raw text for each number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation_gain: String,
}

/// Validated form values, ready to become a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
}

impl WorkoutForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::ElevationGain => &self.elevation_gain,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Distance => self.distance = value,
            FormField::Duration => self.duration = value,
            FormField::Cadence => self.cadence = value,
            FormField::ElevationGain => self.elevation_gain = value,
        }
    }

    /// Whether the row for `field` is shown for the selected type.
    pub fn is_visible(&self, field: FormField) -> bool {
        match field {
            FormField::Distance | FormField::Duration => true,
            FormField::Cadence => self.workout_type == WorkoutType::Running,
            FormField::ElevationGain => self.workout_type == WorkoutType::Cycling,
        }
    }

    /// Empties every number but keeps the selected type.
    pub fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation_gain.clear();
    }

    /// Every relevant field must be finite, and distance and duration must be
    /// positive. Cadence and elevation gain are only checked for finiteness.
    pub fn validate(&self) -> Result<WorkoutInput, ValidationError> {
        let distance = finite(FormField::Distance, &self.distance)?;
        let duration = finite(FormField::Duration, &self.duration)?;

        let kind = match self.workout_type {
            WorkoutType::Running => WorkoutKind::Running {
                cadence: finite(FormField::Cadence, &self.cadence)?,
            },
            WorkoutType::Cycling => WorkoutKind::Cycling {
                elevation_gain: finite(FormField::ElevationGain, &self.elevation_gain)?,
            },
        };

        positive(FormField::Distance, distance)?;
        positive(FormField::Duration, duration)?;

        Ok(WorkoutInput { kind, distance, duration })
    }
}

/// Reads text the way a browser number input coerces it: blank is zero,
/// anything unparsable is NaN.
pub fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.;
    }
    text.parse().unwrap_or(f64::NAN)
}

fn finite(field: FormField, text: &str) -> Result<f64, ValidationError> {
    let value = coerce_number(text);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field: field.name() })
    }
}

fn positive(field: FormField, value: f64) -> Result<(), ValidationError> {
    if value > 0. {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field: field.name() })
    }
}
