use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

use crate::models::restaurant::Review;

/// One entry of the bundled restaurants file.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalRecord {
    pub restaurant_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub average_rating: f64,
    #[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub total_ratings: u64,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub photos: Vec<LocalPhoto>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LocalPhoto {
    #[serde(rename = "streetviewURL")]
    pub streetview_url: String,
}
