use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::repositories::places_repo::PlacesService;
use crate::services::session::FinderSession;

/// Sent when a restaurant gained reviews, so only its view needs re-rendering.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ViewUpdate {
    pub place_id: String,
    pub review_count: usize,
}

/// Spawns one detail request per place. Failures leave the restaurant untouched.
pub fn enrich_reviews(
    session: Arc<Mutex<FinderSession>>,
    places: Arc<dyn PlacesService>,
    updates: broadcast::Sender<ViewUpdate>,
    generation: u64,
    place_ids: Vec<String>,
) -> Vec<JoinHandle<()>> {
    place_ids
        .into_iter()
        .map(|place_id| {
            let session = session.clone();
            let places = places.clone();
            let updates = updates.clone();

            tokio::spawn(async move {
                let reviews = match places.place_reviews(&place_id).await {
                    Ok(reviews) => reviews,
                    Err(e) => {
                        debug!("No reviews for {} due to: {}", place_id, e);
                        return;
                    }
                };

                let mut session = session.lock().await;
                let added = session.apply_reviews(generation, &place_id, reviews);
                if let Some(added) = added.filter(|added| *added > 0) {
                    let review_count = session
                        .restaurant(&place_id)
                        .map(|restaurant| restaurant.reviews.len())
                        .unwrap_or(added);
                    // no subscribers is fine
                    let _ = updates.send(ViewUpdate { place_id, review_count });
                }
            })
        })
        .collect()
}
