use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formatted the way the places web service expects `location=`.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// The visible map region. Bounds are inclusive.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Viewport {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Viewport {
    pub fn contains(&self, point: &LatLng) -> bool {
        if point.lat < self.south || point.lat > self.north {
            return false;
        }

        // west > east means the region wraps across the antimeridian
        if self.west <= self.east {
            point.lng >= self.west && point.lng <= self.east
        } else {
            point.lng >= self.west || point.lng <= self.east
        }
    }
}
