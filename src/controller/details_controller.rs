use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use crate::controller::AppState;
use crate::models::restaurant::Review;
use crate::services::finder::Finder;
use crate::services::session::{DetailPanel, FinderSession};
use crate::views::detail::render_detail;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(retrieve_detail_panel))
        .route("/close", post(close_detail_panel))
        .route("/:place_id/open", post(open_detail_panel))
        .route("/:place_id/reviews", post(add_review))
        .route_layer(Extension(app_state.finder))
}

#[derive(Serialize, Debug)]
pub struct DetailPanelView {
    pub panel: DetailPanel,
    pub html: Option<String>,
}

fn panel_view(session: &FinderSession) -> DetailPanelView {
    let html = match session.panel() {
        DetailPanel::Open(place_id) => session.restaurant(place_id).ok().map(render_detail),
        DetailPanel::Closed => None,
    };

    DetailPanelView {
        panel: session.panel().clone(),
        html,
    }
}

pub async fn retrieve_detail_panel(
    Extension(finder): Extension<Arc<Finder>>,
) -> impl IntoResponse {
    let session = finder.session().lock().await;
    (StatusCode::OK, Json(panel_view(&session))).into_response()
}

/// Marker click: shows the restaurant's current reviews.
pub async fn open_detail_panel(
    Extension(finder): Extension<Arc<Finder>>,
    Path(place_id): Path<String>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;

    if let Err(e) = session.open_detail(&place_id) {
        return e.into_response();
    }
    (StatusCode::OK, Json(panel_view(&session))).into_response()
}

pub async fn close_detail_panel(
    Extension(finder): Extension<Arc<Finder>>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;
    session.close_detail();
    (StatusCode::OK, Json(panel_view(&session))).into_response()
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AddReviewBody {
    pub name: String,
    pub comment: String,
    pub rating: f64,
}

/// Review typed into the panel of a catalog restaurant. Never leaves this process.
pub async fn add_review(
    Extension(finder): Extension<Arc<Finder>>,
    Path(place_id): Path<String>,
    Json(body): Json<AddReviewBody>,
) -> impl IntoResponse {
    let mut session = finder.session().lock().await;
    let review = Review {
        name: body.name,
        rating: body.rating,
        comment: body.comment,
    };

    return match session.add_user_review(&place_id, review) {
        Ok(restaurant) => (StatusCode::OK, render_detail(restaurant)).into_response(),
        Err(e) => e.into_response(),
    };
}
