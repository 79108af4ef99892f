use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinderError;

/// Sidebar rating filter, parsed from the select control's option values.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    Unrated,
    AtLeast(u8),
    FiveStars,
}

impl RatingFilter {
    pub fn matches(&self, rating: f64) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Unrated => rating <= 0.0,
            RatingFilter::AtLeast(threshold) => rating >= f64::from(*threshold),
            RatingFilter::FiveStars => rating >= 5.0,
        }
    }

    pub fn as_select_value(&self) -> &'static str {
        match self {
            RatingFilter::All => "all",
            RatingFilter::Unrated => "None",
            RatingFilter::AtLeast(1) => "oneRating",
            RatingFilter::AtLeast(2) => "twoRating",
            RatingFilter::AtLeast(3) => "threeRating",
            RatingFilter::AtLeast(_) => "fourRating",
            RatingFilter::FiveStars => "fiveRating",
        }
    }
}

impl FromStr for RatingFilter {
    type Err = FinderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "all" => Ok(RatingFilter::All),
            "None" => Ok(RatingFilter::Unrated),
            "oneRating" => Ok(RatingFilter::AtLeast(1)),
            "twoRating" => Ok(RatingFilter::AtLeast(2)),
            "threeRating" => Ok(RatingFilter::AtLeast(3)),
            "fourRating" => Ok(RatingFilter::AtLeast(4)),
            "fiveRating" => Ok(RatingFilter::FiveStars),
            other => Err(FinderError::InvalidInput(format!("unknown rating filter: {}", other))),
        }
    }
}
