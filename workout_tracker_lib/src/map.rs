use crate::{coords::Coords, render::PopupSpec};

/// The interactive map the controller draws on. Clicks on the map are wired
/// up by the implementation and reach the controller as `on_map_click`.
pub trait MapWidget {
    fn set_view(&self, center: Coords, zoom: f64);
    fn add_tile_layer(&self, url: &str, attribution: &str);
    /// Places a marker with its popup opened.
    fn add_marker(&self, position: Coords, popup: &PopupSpec);
    /// Animated recenter.
    fn pan_to(&self, center: Coords, zoom: f64, duration_secs: f64);
}
