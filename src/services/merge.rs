use std::collections::HashSet;

use tracing::warn;

use crate::models::geo::Viewport;
use crate::models::local_record::LocalRecord;
use crate::models::place::NearbyPlace;
use crate::models::restaurant::{RawRecord, Restaurant};

/// Combines both sources into one list: local restaurants inside the viewport
/// first, then external ones whose identifier no local restaurant claimed.
/// Order inside each group is fetch order.
pub fn merge(
    local_raw: &[LocalRecord],
    external_raw: &[NearbyPlace],
    viewport: &Viewport,
) -> Vec<Restaurant> {
    let mut merged = Vec::with_capacity(local_raw.len() + external_raw.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    for record in local_raw {
        let restaurant = match Restaurant::from_raw(RawRecord::Local(record.clone())) {
            Ok(restaurant) => restaurant,
            Err(e) => {
                warn!("Skipping local record due to: {}", e);
                continue;
            }
        };

        if !viewport.contains(&restaurant.location) {
            continue;
        }
        if !seen_ids.insert(restaurant.place_id.clone()) {
            warn!("Skipping repeated local identifier: {}", restaurant.place_id);
            continue;
        }
        merged.push(restaurant);
    }

    for place in external_raw {
        if let Some(place_id) = &place.place_id {
            if seen_ids.contains(place_id) {
                continue;
            }
        }

        let restaurant = match Restaurant::from_raw(RawRecord::External(place.clone())) {
            Ok(restaurant) => restaurant,
            Err(e) => {
                warn!("Skipping external place due to: {}", e);
                continue;
            }
        };

        seen_ids.insert(restaurant.place_id.clone());
        merged.push(restaurant);
    }

    merged
}
