// API error mapping
//
// The only failure a caller can see is "not found": 404 with an empty body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::StoreError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::NotFound(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(e) => {
                tracing::debug!(error = %e, "responding 404");
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}
