use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// The local catalog could not be read or parsed.
    #[error("local catalog unavailable: {0}")]
    DataUnavailable(String),
    /// The places service answered with something other than OK / ZERO_RESULTS.
    #[error("places service error: {0}")]
    ServiceError(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("no restaurant with id: {0}")]
    UnknownRestaurant(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for FinderError {
    fn into_response(self) -> Response {
        let status = match &self {
            FinderError::UnknownRestaurant(_) => StatusCode::NOT_FOUND,
            FinderError::InvalidInput(_) | FinderError::MalformedRecord(_) => StatusCode::BAD_REQUEST,
            FinderError::DataUnavailable(_) | FinderError::ServiceError(_) => StatusCode::BAD_GATEWAY,
        };
        warn!("Request failed due to: {}", self);
        (status, self.to_string()).into_response()
    }
}
