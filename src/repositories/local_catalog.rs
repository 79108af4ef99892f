use async_trait::async_trait;
use tracing::warn;

use crate::error::FinderError;
use crate::helpers::records::parse_each;
use crate::models::local_record::LocalRecord;

/// Source of the bundled, pre-curated restaurant list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_local_catalog(&self) -> Result<Vec<LocalRecord>, FinderError>;
}

/// Reads the catalog from a file path or an `http(s)://` URL.
pub struct StaticCatalog {
    location: String,
    http_client: reqwest::Client,
}

impl StaticCatalog {
    pub fn new(location: String) -> Self {
        Self {
            location,
            http_client: reqwest::Client::new(),
        }
    }

    fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }

    async fn read_remote(&self) -> Result<Vec<u8>, FinderError> {
        let response = self
            .http_client
            .get(&self.location)
            .send()
            .await
            .map_err(|e| FinderError::DataUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FinderError::DataUnavailable(format!(
                "{} answered with {}",
                self.location,
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FinderError::DataUnavailable(e.to_string()))?;
        Ok(body.to_vec())
    }

    async fn read_file(&self) -> Result<Vec<u8>, FinderError> {
        tokio::fs::read(&self.location)
            .await
            .map_err(|e| FinderError::DataUnavailable(format!("{}: {}", self.location, e)))
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_local_catalog(&self) -> Result<Vec<LocalRecord>, FinderError> {
        let body = if self.is_remote() {
            self.read_remote().await?
        } else {
            self.read_file().await?
        };

        parse_catalog(&body)
    }
}

/// The file must be a JSON array. Entries that do not parse are skipped, not fatal.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<LocalRecord>, FinderError> {
    let entries: Vec<serde_json::Value> = serde_json::from_slice(body).map_err(|e| {
        warn!("Failed to parse local catalog due to: {}", e);
        FinderError::DataUnavailable(e.to_string())
    })?;

    Ok(parse_each(entries, "catalog entry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_array() {
        let body = br#"[
            {"restaurantName": "A", "lat": 1.0, "lng": 1.0, "restaurantId": "a"},
            {"restaurantName": "B", "lat": 2.0, "lng": 2.0, "restaurantId": "b"}
        ]"#;

        let records = parse_catalog(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].restaurant_name, "B");
    }

    #[test]
    fn one_broken_entry_keeps_the_rest() {
        let body = br#"[
            {"restaurantName": "A", "lat": 1.0, "lng": 1.0, "restaurantId": "a"},
            {"lat": 2.0, "lng": 2.0, "restaurantId": "nameless"},
            {"restaurantName": "C", "lat": "north", "lng": 3.0, "restaurantId": "c"}
        ]"#;

        let records = parse_catalog(body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].restaurant_id.as_deref(), Some("a"));
    }

    #[test]
    fn garbage_is_data_unavailable() {
        let res = parse_catalog(b"<html>not json</html>");
        assert!(matches!(res, Err(FinderError::DataUnavailable(_))));

        let res = parse_catalog(br#"{"restaurantName": "not a list"}"#);
        assert!(matches!(res, Err(FinderError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn missing_file_is_data_unavailable() {
        let catalog = StaticCatalog::new("/definitely/not/here/restaurants.json".to_string());

        let res = catalog.fetch_local_catalog().await;

        assert!(matches!(res, Err(FinderError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn reads_bundled_catalog() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/restaurants.json");
        let catalog = StaticCatalog::new(path.to_string());

        let records = catalog.fetch_local_catalog().await.unwrap();

        assert!(!records.is_empty());
        assert!(records.iter().all(|record| record.restaurant_id.is_some()));
    }
}
