use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::services::finder::Finder;

pub mod details_controller;
pub mod health_check;
pub mod manual_entry_controller;
pub mod restaurant_controller;

#[derive(Clone)]
pub struct AppState {
    pub finder: Arc<Finder>,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins = config
        .origin_urls
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<HeaderValue>, _>>()
        .context("Invalid origin url in ORIGIN_URLS")?;

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        );

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Restaurant finder listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the restaurant finder server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router(app_state.clone())
        .nest("/restaurants", restaurant_controller::router(app_state.clone()))
        .nest("/details", details_controller::router(app_state.clone()))
        .nest("/manual", manual_entry_controller::router(app_state))
        .fallback(page_not_found_handler)
}
