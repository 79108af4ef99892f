pub mod filter;
pub mod geo;
pub mod local_record;
pub mod place;
pub mod restaurant;
