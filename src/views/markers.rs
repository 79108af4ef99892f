use serde::{Deserialize, Serialize};

use crate::models::geo::LatLng;
use crate::models::restaurant::Restaurant;
use crate::repositories::restaurant_store::RestaurantStore;

pub const MARKER_ICON: &str = "/img/marker.png";

/// A map marker. Reviews are looked up through `place_id` when the marker is
/// clicked, so reviews that arrive later still show up.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Marker {
    pub place_id: String,
    pub position: LatLng,
    pub title: String,
    pub icon: String,
}

impl From<&Restaurant> for Marker {
    fn from(restaurant: &Restaurant) -> Self {
        Marker {
            place_id: restaurant.place_id.clone(),
            position: restaurant.location,
            title: format!("{}\n{}", restaurant.name, restaurant.address),
            icon: MARKER_ICON.to_string(),
        }
    }
}

pub fn markers(store: &RestaurantStore) -> Vec<Marker> {
    store.iter().map(Marker::from).collect()
}
