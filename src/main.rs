use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::local_catalog::StaticCatalog;
use crate::repositories::places_repo::GooglePlacesClient;
use crate::services::finder::Finder;

pub mod config;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting restaurant finder in {} environment", config.environment);

    let catalog = StaticCatalog::new(config.catalog_location.clone());
    let places = GooglePlacesClient::new(
        config.places_base_url.clone(),
        config.google_api_key.clone(),
    );
    let finder = Finder::new(
        Arc::new(catalog),
        Arc::new(places),
        config.search_radius_meters,
        config.search_keyword.clone(),
    );

    controller::serve(AppState { finder: Arc::new(finder) }, &config).await
}
