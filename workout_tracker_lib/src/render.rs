//! What a workout looks like on the page: the marker popup and the list entry.

use crate::{
    config::TrackerConfig,
    workout::{Workout, WorkoutId, WorkoutKind, WorkoutType},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PopupSpec {
    pub content: String,
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl PopupSpec {
    pub fn for_workout(workout: &Workout, config: &TrackerConfig) -> Self {
        let workout_type = workout.workout_type();
        Self {
            content: format!("{} {}", workout_type.emoji(), workout.description),
            max_width: config.popup_max_width,
            min_width: config.popup_min_width,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{workout_type}-popup"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Detail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// A rendered list item, tagged with the workout id so a click can find its record.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutListEntry {
    pub id: WorkoutId,
    pub workout_type: WorkoutType,
    pub title: String,
    pub details: Vec<Detail>,
}

impl WorkoutListEntry {
    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.workout_type)
    }

    pub fn detail(&self, unit: &str) -> Option<&Detail> {
        self.details.iter().find(|d| d.unit == unit)
    }
}

impl From<&Workout> for WorkoutListEntry {
    fn from(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();

        let mut details = vec![
            Detail::new(workout_type.emoji(), workout.distance.to_string(), "km"),
            Detail::new("⏱", workout.duration.to_string(), "min"),
        ];

        // Only the derived metric is rounded
        let metric = workout.metric();
        details.push(Detail::new("⚡️", to_fixed_1(metric.value()), metric.unit()));

        match workout.kind {
            WorkoutKind::Running { cadence } => details.push(Detail::new("🦶🏼", cadence.to_string(), "spm")),
            WorkoutKind::Cycling { elevation_gain } => details.push(Detail::new("⛰", elevation_gain.to_string(), "m")),
        }

        Self {
            id: workout.id.clone(),
            workout_type,
            title: workout.description.clone(),
            details,
        }
    }
}

/// One decimal, rounding the exact stored value with halves away from zero,
/// the way the browser's `toFixed(1)` does. `{:.1}` alone sends halves to even.
pub fn to_fixed_1(value: f64) -> String {
    // A binary float sits exactly on a .x5 boundary only at quarters: .25 and .75
    let quarters = value * 4.;
    let is_half = value.is_finite() && quarters.fract() == 0. && quarters.rem_euclid(2.) == 1.;

    if is_half {
        format!("{:.1}", (value * 10.).round() / 10.)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coords;

    #[test]
    fn running_entry() {
        let run = Workout::running(Coords::new(51.5, -0.1), 5.2, 24., 178.);
        let entry = WorkoutListEntry::from(&run);

        assert_eq!(entry.id, run.id);
        assert_eq!(entry.class_name(), "workout workout--running");
        assert_eq!(entry.title, run.description);

        let values: Vec<(&str, &str)> = entry.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
        assert_eq!(values, vec![("5.2", "km"), ("24", "min"), ("4.6", "min/km"), ("178", "spm")]);
    }

    #[test]
    fn cycling_entry_rounds_only_speed() {
        let ride = Workout::cycling(Coords::new(51.5, -0.1), 27., 90., 550.);
        let entry = WorkoutListEntry::from(&ride);

        assert_eq!(entry.detail("km/h").unwrap().value, "18.0");
        assert_eq!(entry.detail("m").unwrap().value, "550");
        assert_eq!(entry.detail("km").unwrap().value, "27");
        assert_eq!(entry.details[0].icon, "🚴‍♀️");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(to_fixed_1(4.25), "4.3");
        assert_eq!(to_fixed_1(0.75), "0.8");
        assert_eq!(to_fixed_1(18.), "18.0");
    }

    #[test]
    fn near_halves_follow_stored_value() {
        // 1.45 is stored a hair below 1.45
        assert_eq!(to_fixed_1(1.45), "1.4");
        assert_eq!(to_fixed_1(24. / 5.2), "4.6");
    }

    #[test]
    fn derived_metric_halves_round_up() {
        let run = Workout::running(Coords::new(51.5, -0.1), 4., 17., 170.);
        assert_eq!(WorkoutListEntry::from(&run).detail("min/km").unwrap().value, "4.3");

        let ride = Workout::cycling(Coords::new(51.5, -0.1), 5., 240., 0.);
        assert_eq!(WorkoutListEntry::from(&ride).detail("km/h").unwrap().value, "1.3");
    }

    #[test]
    fn popup_for_cycling() {
        let ride = Workout::cycling(Coords::new(51.5, -0.1), 27., 90., 550.);
        let popup = PopupSpec::for_workout(&ride, &TrackerConfig::default());

        assert_eq!(popup.content, format!("🚴‍♀️ {}", ride.description));
        assert_eq!(popup.class_name, "cycling-popup");
        assert_eq!(popup.max_width, 250.);
        assert_eq!(popup.min_width, 100.);
        assert!(!popup.auto_close);
        assert!(!popup.close_on_click);
    }
}
