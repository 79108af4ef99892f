use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::routing::get;
use serde::Serialize;
use crate::controller::AppState;
use crate::services::finder::Finder;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(app_state.finder))
}

#[derive(Serialize, Debug)]
struct HealthReport {
    status: &'static str,
    generation: u64,
    restaurants: usize,
}

/// Liveness plus a glance at the current fetch cycle.
async fn get_health_check(
    Extension(finder): Extension<Arc<Finder>>,
) -> (StatusCode, Json<HealthReport>) {
    let session = finder.session().lock().await;
    let report = HealthReport {
        status: "ok",
        generation: session.store().generation(),
        restaurants: session.store().len(),
    };
    (StatusCode::OK, Json(report))
}
