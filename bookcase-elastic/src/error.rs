//! Error types for the Elasticsearch adapter.
//!
//! All errors convert to [`CatalogError::Store`] at the trait boundary,
//! carrying the HTTP status the search service reported as a hint when
//! there is one. The concrete [`reqwest`] error type never crosses into
//! the core.
//!
//! [`CatalogError::Store`]: bookcase_core::CatalogError::Store

use bookcase_core::CatalogError;

/// Error type for Elasticsearch adapter operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level failure talking to the search service.
    #[error("Elasticsearch transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search service answered with an unexpected status.
    #[error("Elasticsearch returned status {status}: {message}")]
    UnexpectedStatus {
        /// The HTTP status code of the response.
        status: u16,
        /// The response body, as far as it could be read.
        message: String,
    },

    /// The search service answered successfully but the body is not the
    /// expected shape.
    #[error("malformed Elasticsearch response: {0}")]
    MalformedResponse(String),
}

impl From<Error> for CatalogError {
    fn from(error: Error) -> Self {
        let status = match &error {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(source) => source.status().map(|status| status.as_u16()),
            Error::MalformedResponse(_) => None,
        };
        match status {
            Some(status) => CatalogError::store_with_status(error.to_string(), status),
            None => CatalogError::store(error.to_string()),
        }
    }
}
