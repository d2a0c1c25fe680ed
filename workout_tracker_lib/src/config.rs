use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "workouts";
pub const MAP_ZOOM_LEVEL: f64 = 14.;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const POPUP_MAX_WIDTH: f64 = 250.;
pub const POPUP_MIN_WIDTH: f64 = 100.;
pub const PAN_DURATION_SECS: f64 = 1.;
/// How long the form stays `display: none` after a submit, to skip the slide-in animation.
pub const FORM_RESHOW_DELAY_MS: u32 = 1000;

pub const INVALID_INPUT_NOTICE: &str = "Please input a positive number";
pub const POSITION_UNAVAILABLE_NOTICE: &str = "Could not find your position";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub map_zoom_level: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub popup_max_width: f64,
    pub popup_min_width: f64,
    pub pan_duration_secs: f64,
    pub form_reshow_delay_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.into(),
            map_zoom_level: MAP_ZOOM_LEVEL,
            tile_url: TILE_URL.into(),
            tile_attribution: TILE_ATTRIBUTION.into(),
            popup_max_width: POPUP_MAX_WIDTH,
            popup_min_width: POPUP_MIN_WIDTH,
            pan_duration_secs: PAN_DURATION_SECS,
            form_reshow_delay_ms: FORM_RESHOW_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"storage_key": "dev-workouts", "map_zoom_level": 12}"#).unwrap();
        assert_eq!(config.storage_key, "dev-workouts");
        assert_eq!(config.map_zoom_level, 12.);
        assert_eq!(config.tile_url, TILE_URL);
        assert_eq!(config.form_reshow_delay_ms, 1000);
    }
}
