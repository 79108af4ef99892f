use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::controller::AppState;
use crate::models::geo::LatLng;
use crate::services::finder::Finder;
use crate::services::session::{ManualEntry, ManualForm};
use crate::views::markers::Marker;
use crate::views::sidebar::render_sidebar;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", post(submit_manual_entry))
        .route("/open", post(open_manual_form))
        .route("/close", post(close_manual_form))
        .route_layer(Extension(app_state.finder))
}

/// Map right-click: remembers where the new restaurant goes.
pub async fn open_manual_form(
    Extension(finder): Extension<Arc<Finder>>,
    Json(position): Json<LatLng>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;

    return match session.open_manual_form(position) {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(e) => e.into_response(),
    };
}

pub async fn close_manual_form(
    Extension(finder): Extension<Arc<Finder>>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;
    session.close_manual_form();
    (StatusCode::OK, Json(session.form())).into_response()
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ManualEntryBody {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub rating: f64,
}

#[derive(Serialize, Debug)]
pub struct ManualEntryView {
    pub marker: Marker,
    pub form: ManualForm,
    pub sidebar: String,
}

pub async fn submit_manual_entry(
    Extension(finder): Extension<Arc<Finder>>,
    Json(body): Json<ManualEntryBody>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;
    let entry = ManualEntry {
        name: body.name,
        address: body.address,
        rating: body.rating,
    };

    let marker = match session.submit_manual(entry) {
        Ok(restaurant) => Marker::from(restaurant),
        Err(e) => return e.into_response(),
    };
    info!("Added restaurant {} by hand", marker.place_id);

    let view = ManualEntryView {
        marker,
        form: session.form(),
        sidebar: render_sidebar(session.store(), session.filter()),
    };
    (StatusCode::OK, Json(view)).into_response()
}
