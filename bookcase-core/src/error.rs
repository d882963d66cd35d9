//! Error types shared across the catalog core.

use thiserror::Error;

/// Convenience alias for catalog operation results.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type for catalog operations.
///
/// The variants split into two groups. [`Validation`] and [`NotFound`] are
/// expected, recoverable-by-caller outcomes; the remaining variants are
/// failures surfaced to the immediate caller without retry.
///
/// [`Validation`]: CatalogError::Validation
/// [`NotFound`]: CatalogError::NotFound
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or missing input: a numeric bound that does not parse, a
    /// search filter with no active predicates.
    #[error("validation error: {0}")]
    Validation(String),

    /// A lookup addressed a document that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport or availability failure of an external store.
    ///
    /// Carries the status code reported by the store, when there is one, so
    /// callers can surface it without depending on the store client's
    /// concrete error representation.
    #[error("store error: {message}")]
    Store {
        /// Human-readable description of the failure.
        message: String,
        /// Status code reported by the store, when available.
        status: Option<u16>,
    },

    /// A record or document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An expected metric is missing or malformed in an aggregation response.
    #[error("malformed aggregation response: {0}")]
    AggregationMalformed(String),
}

impl CatalogError {
    /// A [`Store`] error with no status hint.
    ///
    /// [`Store`]: CatalogError::Store
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            status: None,
        }
    }

    /// A [`Store`] error carrying the status code the store reported.
    ///
    /// [`Store`]: CatalogError::Store
    pub fn store_with_status(message: impl Into<String>, status: u16) -> Self {
        Self::Store {
            message: message.into(),
            status: Some(status),
        }
    }
}
