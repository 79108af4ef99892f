use tracing::warn;

use crate::models::geo::LatLng;
use crate::models::local_record::LocalRecord;
use crate::models::place::NearbyPlace;
use crate::repositories::local_catalog::CatalogSource;
use crate::repositories::places_repo::PlacesService;

#[derive(Clone, Debug)]
pub struct SearchArea {
    pub center: LatLng,
    pub radius_meters: u32,
    pub keyword: String,
}

/// Runs both fetchers concurrently and waits for both to settle.
/// A failing source contributes an empty list.
pub async fn fetch_all(
    catalog: &dyn CatalogSource,
    places: &dyn PlacesService,
    area: &SearchArea,
) -> (Vec<LocalRecord>, Vec<NearbyPlace>) {
    let (local_res, nearby_res) = tokio::join!(
        catalog.fetch_local_catalog(),
        places.nearby_search(area.center, area.radius_meters, &area.keyword),
    );

    let local = match local_res {
        Ok(records) => records,
        Err(e) => {
            warn!("Local catalog skipped for this cycle due to: {}", e);
            Vec::new()
        }
    };
    let nearby = match nearby_res {
        Ok(places) => places,
        Err(e) => {
            warn!("Nearby search skipped for this cycle due to: {}", e);
            Vec::new()
        }
    };

    (local, nearby)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::{nearby_place, FixtureCatalog, FixturePlaces};

    fn area() -> SearchArea {
        SearchArea {
            center: LatLng::new(48.86, 2.35),
            radius_meters: 2500,
            keyword: "restaurant".to_string(),
        }
    }

    #[tokio::test]
    async fn failures_degrade_to_empty_lists() {
        let catalog = FixtureCatalog::unavailable();
        let places = FixturePlaces::failing("OVER_QUERY_LIMIT");

        let (local, nearby) = fetch_all(&catalog, &places, &area()).await;

        assert!(local.is_empty());
        assert!(nearby.is_empty());
    }

    #[tokio::test]
    async fn one_failure_does_not_hide_the_other_source() {
        let catalog = FixtureCatalog::unavailable();
        let places = FixturePlaces::with_places(vec![nearby_place("g-1", 48.86, 2.35, 4.0)]);

        let (local, nearby) = fetch_all(&catalog, &places, &area()).await;

        assert!(local.is_empty());
        assert_eq!(nearby.len(), 1);
        assert_eq!(places.searches(), vec![(LatLng::new(48.86, 2.35), 2500, "restaurant".to_string())]);
    }
}
