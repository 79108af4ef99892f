use serde::{Deserialize, Serialize};

use crate::models::geo::LatLng;
use crate::models::restaurant::Review;

/// A result of the places nearby-search call.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NearbyPlace {
    pub name: String,
    #[serde(default)]
    pub vicinity: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub user_ratings_total: u64,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Geometry {
    pub location: LatLng,
}

/// Results stay raw so each one is converted, or skipped, on its own.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct PlaceDetails {
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceReview {
    pub author_name: String,
    pub rating: f64,
    #[serde(default)]
    pub text: String,
}

impl From<PlaceReview> for Review {
    fn from(review: PlaceReview) -> Self {
        Review {
            name: review.author_name,
            rating: review.rating,
            comment: review.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nearby_search_payload() {
        let raw = r#"{
            "html_attributions": [],
            "results": [{
                "name": "Le Petit",
                "vicinity": "2 Rue",
                "geometry": {"location": {"lat": 48.1, "lng": 2.2}, "viewport": {}},
                "rating": 4.4,
                "user_ratings_total": 87,
                "place_id": "ChIJ-petit",
                "scope": "GOOGLE"
            }],
            "status": "OK"
        }"#;

        let response: NearbySearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, "OK");

        let place: NearbyPlace = serde_json::from_value(response.results[0].clone()).unwrap();
        assert_eq!(place.place_id.as_deref(), Some("ChIJ-petit"));
        assert_eq!(place.geometry.as_ref().unwrap().location.lng, 2.2);
    }

    #[test]
    fn details_reviews_map_to_restaurant_reviews() {
        let raw = r#"{
            "result": {"reviews": [{"author_name": "Kim", "rating": 5, "text": "Superb", "time": 1}]},
            "status": "OK"
        }"#;

        let response: PlaceDetailsResponse = serde_json::from_str(raw).unwrap();
        let reviews: Vec<Review> = response
            .result
            .unwrap()
            .reviews
            .into_iter()
            .map(Review::from)
            .collect();

        assert_eq!(
            reviews,
            vec![Review { name: "Kim".to_string(), rating: 5.0, comment: "Superb".to_string() }]
        );
    }
}
