use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::{get, post};
use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;
use crate::controller::AppState;
use crate::models::filter::RatingFilter;
use crate::models::geo::{LatLng, Viewport};
use crate::services::enrichment::ViewUpdate;
use crate::services::finder::{CycleReport, Finder};
use crate::views::detail::render_alert_summary;
use crate::views::markers::{markers, Marker};
use crate::views::sidebar::{render_list_item, render_sidebar};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/load", post(load_restaurants))
        .route("/markers", get(retrieve_markers))
        .route("/sidebar", get(render_filtered_sidebar))
        .route("/updates", get(stream_view_updates))
        .route("/:place_id/fragment", get(render_restaurant_fragment))
        .route("/:place_id/summary", get(retrieve_review_summary))
        .route_layer(Extension(app_state.finder))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LoadRestaurantsBody {
    pub center: LatLng,
    pub viewport: Viewport,
}

#[derive(Serialize, Debug)]
pub struct LoadedView {
    pub cycle: CycleReport,
    pub markers: Vec<Marker>,
    pub filter: &'static str,
    pub sidebar: String,
}

/// Runs one fetch cycle for the current map view. Reviews keep arriving afterwards.
pub async fn load_restaurants(
    Extension(finder): Extension<Arc<Finder>>,
    Json(body): Json<LoadRestaurantsBody>,
) -> impl IntoResponse {
    let (cycle, _enrichment) = finder.load(body.center, body.viewport).await;

    let session = finder.session().lock().await;
    let view = LoadedView {
        cycle,
        markers: markers(session.store()),
        filter: session.filter().as_select_value(),
        sidebar: render_sidebar(session.store(), session.filter()),
    };

    (StatusCode::OK, Json(view)).into_response()
}

pub async fn retrieve_markers(
    Extension(finder): Extension<Arc<Finder>>,
) -> impl IntoResponse {
    let session = finder.session().lock().await;
    (StatusCode::OK, Json(markers(session.store()))).into_response()
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SidebarQuery {
    pub filter: Option<String>,
}

/// Applies the rating filter from the select control and re-renders the list.
pub async fn render_filtered_sidebar(
    Extension(finder): Extension<Arc<Finder>>,
    Query(query): Query<SidebarQuery>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;

    if let Some(value) = query.filter {
        match value.parse::<RatingFilter>() {
            Ok(filter) => session.set_filter(filter),
            Err(e) => return e.into_response(),
        }
    }

    Html(render_sidebar(session.store(), session.filter())).into_response()
}

pub async fn render_restaurant_fragment(
    Extension(finder): Extension<Arc<Finder>>,
    Path(place_id): Path<String>,
) -> impl IntoResponse {
    let session = finder.session().lock().await;

    return match session.restaurant(&place_id) {
        Ok(restaurant) => Html(render_list_item(restaurant)).into_response(),
        Err(e) => e.into_response(),
    };
}

/// Text for the alert shown when a sidebar entry is clicked.
pub async fn retrieve_review_summary(
    Extension(finder): Extension<Arc<Finder>>,
    Path(place_id): Path<String>,
) -> impl IntoResponse {
    let session = finder.session().lock().await;

    return match session.restaurant(&place_id) {
        Ok(restaurant) => (StatusCode::OK, render_alert_summary(restaurant)).into_response(),
        Err(e) => e.into_response(),
    };
}

fn view_update_event(update: &ViewUpdate) -> Result<Event, axum::Error> {
    Event::default()
        .event("reviews")
        .json_data(update)
        .map_err(axum::Error::new)
}

pub async fn stream_view_updates(
    Extension(finder): Extension<Arc<Finder>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = finder.subscribe();

    let updates = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(update) => {
                    let event = view_update_event(&update);
                    return Some((event, receiver));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("View update stream skipped {} updates", skipped);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(updates).keep_alive(KeepAlive::default())
}
