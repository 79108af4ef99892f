//! Fixture implementations of the data sources for tests that must not touch the network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::FinderError;
use crate::models::geo::LatLng;
use crate::models::local_record::LocalRecord;
use crate::models::place::{Geometry, NearbyPlace};
use crate::models::restaurant::Review;
use crate::repositories::local_catalog::CatalogSource;
use crate::repositories::places_repo::PlacesService;

pub fn local_record(id: &str, lat: f64, lng: f64, rating: f64) -> LocalRecord {
    LocalRecord {
        restaurant_name: format!("Local {}", id),
        address: format!("{} Local Street", id),
        lat: Some(lat),
        lng: Some(lng),
        average_rating: rating,
        total_ratings: 1,
        restaurant_id: Some(id.to_string()),
        source: Some("local".to_string()),
        reviews: Vec::new(),
        photos: Vec::new(),
    }
}

pub fn nearby_place(id: &str, lat: f64, lng: f64, rating: f64) -> NearbyPlace {
    NearbyPlace {
        name: format!("Google {}", id),
        vicinity: format!("{} Google Avenue", id),
        geometry: Some(Geometry { location: LatLng::new(lat, lng) }),
        rating,
        user_ratings_total: 10,
        place_id: Some(id.to_string()),
        scope: Some("GOOGLE".to_string()),
    }
}

pub fn review(name: &str, rating: f64) -> Review {
    Review {
        name: name.to_string(),
        rating,
        comment: format!("{} says hi", name),
    }
}

pub struct FixtureCatalog {
    records: Option<Vec<LocalRecord>>,
}

impl FixtureCatalog {
    pub fn with_records(records: Vec<LocalRecord>) -> Self {
        Self { records: Some(records) }
    }

    pub fn unavailable() -> Self {
        Self { records: None }
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn fetch_local_catalog(&self) -> Result<Vec<LocalRecord>, FinderError> {
        self.records
            .clone()
            .ok_or_else(|| FinderError::DataUnavailable("404 Not Found".to_string()))
    }
}

#[derive(Default)]
pub struct FixturePlaces {
    places: Vec<NearbyPlace>,
    search_status: Option<String>,
    reviews: HashMap<String, Vec<Review>>,
    searches: Mutex<Vec<(LatLng, u32, String)>>,
    detail_requests: Mutex<Vec<String>>,
}

impl FixturePlaces {
    pub fn with_places(places: Vec<NearbyPlace>) -> Self {
        Self {
            places,
            ..Default::default()
        }
    }

    pub fn failing(status: &str) -> Self {
        Self {
            search_status: Some(status.to_string()),
            ..Default::default()
        }
    }

    pub fn reviews_for(mut self, place_id: &str, reviews: Vec<Review>) -> Self {
        self.reviews.insert(place_id.to_string(), reviews);
        self
    }

    pub fn searches(&self) -> Vec<(LatLng, u32, String)> {
        self.searches.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        let mut requests = self.detail_requests.lock().unwrap().clone();
        requests.sort();
        requests
    }
}

#[async_trait]
impl PlacesService for FixturePlaces {
    async fn nearby_search(
        &self,
        center: LatLng,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<NearbyPlace>, FinderError> {
        self.searches
            .lock()
            .unwrap()
            .push((center, radius_meters, keyword.to_string()));

        match &self.search_status {
            Some(status) => Err(FinderError::ServiceError(status.clone())),
            None => Ok(self.places.clone()),
        }
    }

    async fn place_reviews(
        &self,
        place_id: &str,
    ) -> Result<Vec<Review>, FinderError> {
        self.detail_requests.lock().unwrap().push(place_id.to_string());

        self.reviews
            .get(place_id)
            .cloned()
            .ok_or_else(|| FinderError::ServiceError("NOT_FOUND".to_string()))
    }
}
