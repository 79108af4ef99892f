use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FinderError;
use crate::helpers::records::parse_each;
use crate::models::geo::LatLng;
use crate::models::place::{NearbyPlace, NearbySearchResponse, PlaceDetailsResponse};
use crate::models::restaurant::Review;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// The external places provider: nearby search plus per-place reviews.
#[async_trait]
pub trait PlacesService: Send + Sync {
    async fn nearby_search(
        &self,
        center: LatLng,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<NearbyPlace>, FinderError>;

    async fn place_reviews(
        &self,
        place_id: &str,
    ) -> Result<Vec<Review>, FinderError>;
}

#[derive(Clone, Serialize, Deserialize, Debug)]
struct NearbySearchParams {
    location: String,
    radius: String,
    keyword: String,
    key: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
struct PlaceDetailsParams {
    place_id: String,
    fields: String,
    key: String,
}

/// Client for the Google Places web service.
pub struct GooglePlacesClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(
        base_url: String,
        api_key: String,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn get_json<P, T>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T, FinderError>
    where
        P: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| FinderError::ServiceError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FinderError::ServiceError(format!(
                "{} answered with {}",
                path,
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FinderError::ServiceError(e.to_string()))
    }
}

#[async_trait]
impl PlacesService for GooglePlacesClient {
    async fn nearby_search(
        &self,
        center: LatLng,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<NearbyPlace>, FinderError> {
        let params = NearbySearchParams {
            location: center.to_query_value(),
            radius: radius_meters.to_string(),
            keyword: keyword.to_string(),
            key: self.api_key.clone(),
        };

        let response: NearbySearchResponse = self.get_json("nearbysearch/json", &params).await?;
        nearby_results(response)
    }

    async fn place_reviews(
        &self,
        place_id: &str,
    ) -> Result<Vec<Review>, FinderError> {
        let params = PlaceDetailsParams {
            place_id: place_id.to_string(),
            fields: "reviews".to_string(),
            key: self.api_key.clone(),
        };

        let response: PlaceDetailsResponse = self.get_json("details/json", &params).await?;
        let reviews = detail_reviews(response)?;
        debug!("Fetched {} reviews for place {}", reviews.len(), place_id);
        Ok(reviews)
    }
}

pub fn nearby_results(response: NearbySearchResponse) -> Result<Vec<NearbyPlace>, FinderError> {
    match response.status.as_str() {
        STATUS_OK => Ok(parse_each(response.results, "nearby result")),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        other => Err(FinderError::ServiceError(other.to_string())),
    }
}

pub fn detail_reviews(response: PlaceDetailsResponse) -> Result<Vec<Review>, FinderError> {
    match response.status.as_str() {
        STATUS_OK => Ok(response
            .result
            .unwrap_or_default()
            .reviews
            .into_iter()
            .map(Review::from)
            .collect()),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        other => Err(FinderError::ServiceError(other.to_string())),
    }
}
