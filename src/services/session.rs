use serde::Serialize;

use crate::error::FinderError;
use crate::models::filter::RatingFilter;
use crate::models::geo::{LatLng, Viewport};
use crate::models::local_record::LocalRecord;
use crate::models::place::NearbyPlace;
use crate::models::restaurant::{RawRecord, Restaurant, Review, Source};
use crate::repositories::restaurant_store::RestaurantStore;
use crate::services::merge::merge;

pub const MANUAL_ID_PREFIX: &str = "manual-";

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "state", content = "place_id", rename_all = "snake_case")]
pub enum DetailPanel {
    Closed,
    Open(String),
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq)]
#[serde(tag = "state", content = "position", rename_all = "snake_case")]
pub enum ManualForm {
    Closed,
    Open(LatLng),
}

#[derive(Clone, Debug)]
pub struct ManualEntry {
    pub name: String,
    pub address: String,
    pub rating: f64,
}

/// Everything one open map page holds between requests.
pub struct FinderSession {
    store: RestaurantStore,
    local_raw: Vec<LocalRecord>,
    manual_raw: Vec<LocalRecord>,
    filter: RatingFilter,
    panel: DetailPanel,
    form: ManualForm,
    viewport: Option<Viewport>,
    next_manual_id: u64,
    latest_request: u64,
}

impl Default for FinderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FinderSession {
    pub fn new() -> Self {
        Self {
            store: RestaurantStore::new(0),
            local_raw: Vec::new(),
            manual_raw: Vec::new(),
            filter: RatingFilter::All,
            panel: DetailPanel::Closed,
            form: ManualForm::Closed,
            viewport: None,
            next_manual_id: 1,
            latest_request: 0,
        }
    }

    /// Ticket for a load that is about to fetch. Only the newest ticket may install its results.
    pub fn request_cycle(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }

    /// Installs fetched data unless a newer load was requested meanwhile.
    pub fn install_cycle(
        &mut self,
        ticket: u64,
        local_raw: Vec<LocalRecord>,
        external_raw: Vec<NearbyPlace>,
        viewport: Viewport,
    ) -> Option<u64> {
        if ticket != self.latest_request {
            return None;
        }
        Some(self.begin_cycle(local_raw, external_raw, viewport))
    }

    /// Replaces the store with a freshly merged one and returns its generation.
    /// Hand-added entries ride along with the catalog records.
    pub fn begin_cycle(
        &mut self,
        mut local_raw: Vec<LocalRecord>,
        external_raw: Vec<NearbyPlace>,
        viewport: Viewport,
    ) -> u64 {
        local_raw.extend(self.manual_raw.iter().cloned());

        let generation = self.store.generation() + 1;
        let merged = merge(&local_raw, &external_raw, &viewport);
        self.store = RestaurantStore::from_merged(generation, merged);
        self.local_raw = local_raw;
        self.viewport = Some(viewport);

        let panel_orphaned = matches!(
            &self.panel,
            DetailPanel::Open(place_id) if self.store.get(place_id).is_none()
        );
        if panel_orphaned {
            self.panel = DetailPanel::Closed;
        }

        generation
    }

    pub fn store(&self) -> &RestaurantStore {
        &self.store
    }

    pub fn local_raw(&self) -> &[LocalRecord] {
        &self.local_raw
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn google_place_ids(&self) -> Vec<String> {
        self.store
            .iter()
            .filter(|restaurant| restaurant.source == Source::Google)
            .map(|restaurant| restaurant.place_id.clone())
            .collect()
    }

    /// Appends fetched reviews if the cycle that requested them is still current.
    pub fn apply_reviews(
        &mut self,
        generation: u64,
        place_id: &str,
        reviews: Vec<Review>,
    ) -> Option<usize> {
        if generation != self.store.generation() {
            return None;
        }
        self.store
            .get_mut(place_id)
            .map(|restaurant| restaurant.append_reviews(reviews))
    }

    pub fn restaurant(&self, place_id: &str) -> Result<&Restaurant, FinderError> {
        self.store
            .get(place_id)
            .ok_or_else(|| FinderError::UnknownRestaurant(place_id.to_string()))
    }

    pub fn filter(&self) -> RatingFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: RatingFilter) {
        self.filter = filter;
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    pub fn open_detail(&mut self, place_id: &str) -> Result<&Restaurant, FinderError> {
        if self.store.get(place_id).is_none() {
            return Err(FinderError::UnknownRestaurant(place_id.to_string()));
        }
        self.panel = DetailPanel::Open(place_id.to_string());
        self.restaurant(place_id)
    }

    pub fn close_detail(&mut self) {
        self.panel = DetailPanel::Closed;
    }

    /// Review typed into the detail panel of a catalog restaurant. Kept in memory only.
    pub fn add_user_review(
        &mut self,
        place_id: &str,
        review: Review,
    ) -> Result<&Restaurant, FinderError> {
        validate_rating(review.rating)?;
        let restaurant = self
            .store
            .get_mut(place_id)
            .ok_or_else(|| FinderError::UnknownRestaurant(place_id.to_string()))?;

        if restaurant.source != Source::Local {
            return Err(FinderError::InvalidInput(format!(
                "{} does not accept reviews here",
                place_id
            )));
        }
        restaurant.reviews.push(review);
        Ok(&*restaurant)
    }

    pub fn form(&self) -> ManualForm {
        self.form
    }

    /// Right-click on the map. Positions outside the loaded view are refused,
    /// the next cycle would drop them anyway.
    pub fn open_manual_form(&mut self, position: LatLng) -> Result<ManualForm, FinderError> {
        if let Some(viewport) = &self.viewport {
            if !viewport.contains(&position) {
                return Err(FinderError::InvalidInput(format!(
                    "{} is outside the loaded map view",
                    position.to_query_value()
                )));
            }
        }
        self.form = ManualForm::Open(position);
        Ok(self.form)
    }

    pub fn close_manual_form(&mut self) {
        self.form = ManualForm::Closed;
    }

    /// Adds a hand-entered restaurant at the right-clicked position.
    pub fn submit_manual(&mut self, entry: ManualEntry) -> Result<&Restaurant, FinderError> {
        let position = match self.form {
            ManualForm::Open(position) => position,
            ManualForm::Closed => {
                return Err(FinderError::InvalidInput("the manual entry form is not open".to_string()))
            }
        };
        validate_rating(entry.rating)?;
        if entry.name.trim().is_empty() {
            return Err(FinderError::InvalidInput("a restaurant needs a name".to_string()));
        }

        let place_id = format!("{}{}", MANUAL_ID_PREFIX, self.next_manual_id);
        let record = LocalRecord {
            restaurant_name: entry.name,
            address: entry.address,
            lat: Some(position.lat),
            lng: Some(position.lng),
            average_rating: entry.rating,
            total_ratings: 0,
            restaurant_id: Some(place_id.clone()),
            source: Some(Source::Manual.as_str().to_string()),
            reviews: Vec::new(),
            photos: Vec::new(),
        };

        let restaurant = Restaurant::from_raw(RawRecord::Local(record.clone()))?;
        self.store.insert(restaurant)?;
        self.next_manual_id += 1;
        self.local_raw.push(record.clone());
        self.manual_raw.push(record);
        self.form = ManualForm::Closed;

        self.restaurant(&place_id)
    }
}

fn validate_rating(rating: f64) -> Result<(), FinderError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(FinderError::InvalidInput(format!(
            "rating must be between 0 and 5, got {}",
            rating
        )));
    }
    Ok(())
}
