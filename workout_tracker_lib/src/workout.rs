use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::coords::Coords;

/// Identifier derived from the creation time (last 10 digits of the millisecond timestamp).
///
/// Unique for interactive use, one submission per user action. Two workouts created
/// within the same millisecond share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        let millis = timestamp.timestamp_millis().to_string();
        let start = millis.len().saturating_sub(10);
        Self(millis[start..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(format!("Unknown workout type: {other}")),
        }
    }
}

/// The type-specific part of a workout, tagged by `type` in the stored form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// Steps per minute. Older payloads spell it `cadance`.
        #[serde(alias = "cadance")]
        cadence: f64,
    },
    Cycling {
        /// Meters, may be zero or negative.
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
    },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Minutes per kilometer.
    Pace(f64),
    /// Kilometers per hour.
    Speed(f64),
}

impl Metric {
    pub fn value(&self) -> f64 {
        match self {
            Self::Pace(v) | Self::Speed(v) => *v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Pace(_) => "min/km",
            Self::Speed(_) => "km/h",
        }
    }
}

/// Derived metric as a function of the stored fields only.
pub fn metric(kind: &WorkoutKind, distance: f64, duration: f64) -> Metric {
    match kind {
        WorkoutKind::Running { .. } => Metric::Pace(duration / distance),
        WorkoutKind::Cycling { .. } => Metric::Speed(distance / (duration / 60.)),
    }
}

/// "Running on May 22"
pub fn describe(workout_type: WorkoutType, date: NaiveDate) -> String {
    format!("{} on {}", workout_type.label(), date.format("%B %-d"))
}

/// One logged activity. Plain data: everything derived is either stored once
/// (`description`) or recomputed from the stored fields (`metric`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub coords: Coords,
    /// Kilometers.
    pub distance: f64,
    /// Minutes.
    pub duration: f64,
    pub description: String,
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

impl Workout {
    pub fn running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::create(WorkoutKind::Running { cadence }, coords, distance, duration, Utc::now())
    }

    pub fn cycling(coords: Coords, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self::create(WorkoutKind::Cycling { elevation_gain }, coords, distance, duration, Utc::now())
    }

    pub(crate) fn create(kind: WorkoutKind, coords: Coords, distance: f64, duration: f64, created_at: DateTime<Utc>) -> Self {
        let local_date = created_at.with_timezone(&Local).date_naive();

        Self {
            id: WorkoutId::from_timestamp(created_at),
            created_at,
            coords,
            distance,
            duration,
            description: describe(kind.workout_type(), local_date),
            kind,
        }
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    pub fn metric(&self) -> Metric {
        metric(&self.kind, self.distance, self.duration)
    }

    pub fn pace(&self) -> Option<f64> {
        match self.metric() {
            Metric::Pace(pace) => Some(pace),
            Metric::Speed(_) => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.metric() {
            Metric::Speed(speed) => Some(speed),
            Metric::Pace(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn running_pace() {
        let run = Workout::running(Coords::new(30., -12.), 5.2, 24., 178.);
        assert_eq!(run.workout_type(), WorkoutType::Running);
        assert_eq!(run.pace(), Some(24. / 5.2));
        assert_eq!(run.speed(), None);
        assert!((run.pace().unwrap() - 4.615).abs() < 1e-3);
    }

    #[test]
    fn cycling_speed() {
        let ride = Workout::cycling(Coords::new(30., -12.), 27., 90., 550.);
        assert_eq!(ride.speed(), Some(18.));
        assert_eq!(ride.metric().unit(), "km/h");
        assert_eq!(ride.pace(), None);
    }

    #[test]
    fn description_uses_month_name_and_day() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert_eq!(describe(WorkoutType::Running, date), "Running on May 2");
        assert_eq!(describe(WorkoutType::Cycling, date), "Cycling on May 2");
    }

    #[test]
    fn description_follows_local_creation_date() {
        let created_at = at(1_747_915_754_274);
        let workout = Workout::create(WorkoutKind::Running { cadence: 170. }, Coords::new(0., 0.), 1., 1., created_at);
        let expected = describe(WorkoutType::Running, created_at.with_timezone(&Local).date_naive());
        assert_eq!(workout.description, expected);
    }

    #[test]
    fn id_keeps_last_ten_digits_of_millis() {
        assert_eq!(WorkoutId::from_timestamp(at(1_747_915_754_274)).as_str(), "7915754274");
        assert_eq!(WorkoutId::from_timestamp(at(1_234)).as_str(), "1234");
    }

    #[test]
    fn same_millisecond_shares_id() {
        let created_at = at(1_747_915_754_274);
        let a = Workout::create(WorkoutKind::Running { cadence: 170. }, Coords::new(0., 0.), 1., 1., created_at);
        let b = Workout::create(WorkoutKind::Cycling { elevation_gain: 0. }, Coords::new(0., 0.), 1., 1., created_at);
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn stored_form_is_flat_and_tagged() {
        let created_at = at(1_747_915_754_274);
        let ride = Workout::create(WorkoutKind::Cycling { elevation_gain: 550. }, Coords::new(51.5, -0.1), 27., 90., created_at);
        let value = serde_json::to_value(&ride).unwrap();

        assert_eq!(value["type"], "cycling");
        assert_eq!(value["elevationGain"], 550.);
        assert_eq!(value["coords"], serde_json::json!([51.5, -0.1]));
        assert_eq!(value["id"], "7915754274");
        assert!(value.get("speed").is_none());
    }

    #[test]
    fn reads_payload_written_by_the_old_page() {
        let json = r#"{
            "date": "2025-05-22T12:09:14.274Z",
            "id": "7915754274",
            "clicks": 0,
            "coords": [30, -12],
            "distance": 5.2,
            "duration": 24,
            "type": "running",
            "cadance": 178,
            "pace": 4.615384615384615,
            "description": "Running on May 22"
        }"#;

        let run: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(run.kind, WorkoutKind::Running { cadence: 178. });
        assert_eq!(run.description, "Running on May 22");
        assert_eq!(run.pace(), Some(24. / 5.2));
    }

    #[test]
    fn workout_type_parses() {
        assert_eq!("cycling".parse::<WorkoutType>(), Ok(WorkoutType::Cycling));
        assert!("swimming".parse::<WorkoutType>().is_err());
        assert_eq!(WorkoutType::Running.to_string(), "running");
    }
}
