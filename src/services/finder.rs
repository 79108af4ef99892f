use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::info;

use crate::models::geo::{LatLng, Viewport};
use crate::repositories::local_catalog::CatalogSource;
use crate::repositories::places_repo::PlacesService;
use crate::services::enrichment::{enrich_reviews, ViewUpdate};
use crate::services::fetch::{fetch_all, SearchArea};
use crate::services::session::FinderSession;

pub const UPDATE_CHANNEL_CAPACITY: usize = 256;

/// Owns the data sources and the page session, and runs fetch cycles.
pub struct Finder {
    session: Arc<Mutex<FinderSession>>,
    catalog: Arc<dyn CatalogSource>,
    places: Arc<dyn PlacesService>,
    updates: broadcast::Sender<ViewUpdate>,
    radius_meters: u32,
    keyword: String,
}

#[derive(Serialize, Debug)]
pub struct CycleReport {
    pub generation: u64,
    pub restaurant_count: usize,
    pub enriching: usize,
}

impl Finder {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        places: Arc<dyn PlacesService>,
        radius_meters: u32,
        keyword: String,
    ) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            session: Arc::new(Mutex::new(FinderSession::new())),
            catalog,
            places,
            updates,
            radius_meters,
            keyword,
        }
    }

    pub fn session(&self) -> &Arc<Mutex<FinderSession>> {
        &self.session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewUpdate> {
        self.updates.subscribe()
    }

    /// Fetches both sources, rebuilds the store and starts review enrichment.
    /// Returns before enrichment finishes; the handles let callers wait for it.
    /// When loads overlap only the most recently requested one installs its store,
    /// the others report the store as they found it and enrich nothing.
    pub async fn load(
        &self,
        center: LatLng,
        viewport: Viewport,
    ) -> (CycleReport, Vec<JoinHandle<()>>) {
        let ticket = self.session.lock().await.request_cycle();
        let area = SearchArea {
            center,
            radius_meters: self.radius_meters,
            keyword: self.keyword.clone(),
        };
        let (local_raw, external_raw) =
            fetch_all(self.catalog.as_ref(), self.places.as_ref(), &area).await;

        let (generation, restaurant_count, google_ids) = {
            let mut session = self.session.lock().await;
            match session.install_cycle(ticket, local_raw, external_raw, viewport) {
                Some(generation) => {
                    info!(
                        "Fetch cycle {} kept {} restaurants out of {} local records",
                        generation,
                        session.store().len(),
                        session.local_raw().len()
                    );
                    (generation, session.store().len(), session.google_place_ids())
                }
                None => {
                    info!("Dropping results of superseded load {}", ticket);
                    (session.store().generation(), session.store().len(), Vec::new())
                }
            }
        };

        let report = CycleReport {
            generation,
            restaurant_count,
            enriching: google_ids.len(),
        };
        let handles = enrich_reviews(
            self.session.clone(),
            self.places.clone(),
            self.updates.clone(),
            generation,
            google_ids,
        );

        (report, handles)
    }
}
