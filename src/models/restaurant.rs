use serde::{Deserialize, Serialize};

use crate::error::FinderError;
use crate::models::geo::LatLng;
use crate::models::local_record::LocalRecord;
use crate::models::place::NearbyPlace;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Source {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "GOOGLE")]
    Google,
    /// Added by hand on the map, has no provider identifier.
    #[serde(rename = "")]
    Manual,
}

impl Source {
    /// Catalog entries carry "local"; hand-added ones carry an empty tag.
    pub fn from_local_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("") => Source::Manual,
            _ => Source::Local,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Local => "local",
            Source::Google => "GOOGLE",
            Source::Manual => "",
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub name: String,
    pub rating: f64,
    pub comment: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub location: LatLng,
    pub average_rating: f64,
    pub total_ratings: u64,
    pub source: Source,
    pub reviews: Vec<Review>,
    pub photos: Vec<String>,
}

/// A record as it arrives from either data source, before normalization.
#[derive(Clone, Debug)]
pub enum RawRecord {
    Local(LocalRecord),
    External(NearbyPlace),
}

impl Restaurant {
    pub fn from_raw(raw: RawRecord) -> Result<Self, FinderError> {
        match raw {
            RawRecord::Local(record) => {
                let place_id = non_empty_id(record.restaurant_id, &record.restaurant_name)?;
                let location = match (record.lat, record.lng) {
                    (Some(lat), Some(lng)) => LatLng::new(lat, lng),
                    _ => {
                        return Err(FinderError::MalformedRecord(format!(
                            "local restaurant {} has no coordinates",
                            record.restaurant_name
                        )))
                    }
                };

                Ok(Restaurant {
                    place_id,
                    name: record.restaurant_name,
                    address: record.address,
                    location,
                    average_rating: record.average_rating,
                    total_ratings: record.total_ratings,
                    source: Source::from_local_tag(record.source.as_deref()),
                    reviews: record.reviews,
                    photos: record
                        .photos
                        .into_iter()
                        .map(|photo| photo.streetview_url)
                        .collect(),
                })
            }
            RawRecord::External(place) => {
                let place_id = non_empty_id(place.place_id, &place.name)?;
                let location = place
                    .geometry
                    .map(|geometry| geometry.location)
                    .ok_or_else(|| {
                        FinderError::MalformedRecord(format!("place {} has no geometry", place.name))
                    })?;

                Ok(Restaurant {
                    place_id,
                    name: place.name,
                    address: place.vicinity,
                    location,
                    average_rating: place.rating,
                    total_ratings: place.user_ratings_total,
                    source: Source::Google,
                    reviews: Vec::new(),
                    photos: Vec::new(),
                })
            }
        }
    }

    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Appends reviews that are not already present, returns how many were added.
    pub fn append_reviews(&mut self, reviews: Vec<Review>) -> usize {
        let mut added = 0;
        for review in reviews {
            if !self.reviews.contains(&review) {
                self.reviews.push(review);
                added += 1;
            }
        }
        added
    }
}

fn non_empty_id(id: Option<String>, name: &str) -> Result<String, FinderError> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(FinderError::MalformedRecord(format!("{} has no identifier", name))),
    }
}
