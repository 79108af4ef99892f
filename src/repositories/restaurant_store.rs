use std::collections::HashMap;
use tracing::warn;

use crate::error::FinderError;
use crate::models::restaurant::Restaurant;

/// In-memory registry for one fetch-render cycle. Entries are never removed;
/// the next cycle builds a fresh store with a higher generation.
#[derive(Debug, Default)]
pub struct RestaurantStore {
    generation: u64,
    restaurants: Vec<Restaurant>,
    index: HashMap<String, usize>,
}

impl RestaurantStore {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            restaurants: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds the next cycle's store from a merged list.
    pub fn from_merged(
        generation: u64,
        restaurants: Vec<Restaurant>,
    ) -> Self {
        let mut store = Self::new(generation);
        for restaurant in restaurants {
            if let Err(e) = store.insert(restaurant) {
                warn!("Skipping restaurant while filling store due to: {}", e);
            }
        }
        store
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn insert(
        &mut self,
        restaurant: Restaurant,
    ) -> Result<(), FinderError> {
        if restaurant.place_id.is_empty() {
            return Err(FinderError::MalformedRecord(format!(
                "{} has no identifier",
                restaurant.name
            )));
        }
        if self.index.contains_key(&restaurant.place_id) {
            return Err(FinderError::InvalidInput(format!(
                "duplicate identifier: {}",
                restaurant.place_id
            )));
        }

        self.index.insert(restaurant.place_id.clone(), self.restaurants.len());
        self.restaurants.push(restaurant);
        Ok(())
    }

    pub fn get(&self, place_id: &str) -> Option<&Restaurant> {
        self.index.get(place_id).map(|position| &self.restaurants[*position])
    }

    pub fn get_mut(&mut self, place_id: &str) -> Option<&mut Restaurant> {
        match self.index.get(place_id) {
            Some(position) => self.restaurants.get_mut(*position),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::restaurant::RawRecord;
    use crate::services::fixtures::local_record;

    fn restaurant(id: &str) -> Restaurant {
        let mut restaurant = Restaurant::from_raw(RawRecord::Local(local_record("seed", 0.0, 0.0, 3.0))).unwrap();
        restaurant.place_id = id.to_string();
        restaurant.name = format!("Place {}", id);
        restaurant
    }

    #[test]
    fn keeps_insertion_order_and_looks_up_by_id() {
        let store = RestaurantStore::from_merged(1, vec![restaurant("b"), restaurant("a")]);

        let ids: Vec<&str> = store.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.get("a").unwrap().name, "Place a");
        assert!(store.get("c").is_none());
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn rejects_empty_and_duplicate_ids() {
        let mut store = RestaurantStore::new(0);

        assert!(store.insert(restaurant("a")).is_ok());
        assert!(matches!(store.insert(restaurant("a")), Err(FinderError::InvalidInput(_))));
        assert!(matches!(store.insert(restaurant("")), Err(FinderError::MalformedRecord(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn from_merged_drops_duplicates() {
        let store = RestaurantStore::from_merged(2, vec![restaurant("a"), restaurant("a")]);
        assert_eq!(store.len(), 1);
    }
}
