//! Mapping of catalog errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookcase_core::CatalogError;
use serde_json::json;

/// Convenience alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Response wrapper for [`CatalogError`].
///
/// Validation problems map to 400 and lookup misses to 404; store failures
/// reuse the status hint the store provided, falling back to 502 when the
/// failure never reached the store's HTTP layer. Everything else is a 500.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Store { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            CatalogError::Serialization(_) | CatalogError::AggregationMalformed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({ "message": self.0.to_string() }));
        (status, body).into_response()
    }
}
