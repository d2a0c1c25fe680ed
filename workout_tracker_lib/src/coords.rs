use serde::{Deserialize, Serialize};

/// A geographic point as `(latitude, longitude)`. Stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

impl From<(f64, f64)> for Coords {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self(latitude, longitude)
    }
}

impl From<Coords> for (f64, f64) {
    fn from(coords: Coords) -> Self {
        (coords.0, coords.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lat_lng_pair() {
        let coords = Coords::new(51.5, -0.1);
        assert_eq!(serde_json::to_string(&coords).unwrap(), "[51.5,-0.1]");

        let parsed: Coords = serde_json::from_str("[30.0,-12.0]").unwrap();
        assert_eq!(parsed.latitude(), 30.0);
        assert_eq!(parsed.longitude(), -12.0);
    }
}
