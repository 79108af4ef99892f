use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::FinderError;

/// Converts each raw element on its own. Elements that do not fit `T` are
/// logged as malformed and skipped so one bad entry cannot sink the batch.
pub fn parse_each<T: DeserializeOwned>(
    values: Vec<Value>,
    kind: &str,
) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                let error = FinderError::MalformedRecord(format!("{} #{}: {}", kind, position, e));
                warn!("Skipping record due to: {}", error);
                None
            }
        })
        .collect()
}
