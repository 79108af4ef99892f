pub mod local_catalog;
pub mod places_repo;
pub mod restaurant_store;
