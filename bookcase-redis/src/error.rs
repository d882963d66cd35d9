//! Error types for Redis backend operations.
//!
//! All errors convert to [`CatalogError::Store`] at the trait boundary, so
//! the concrete client error type never crosses into the core.
//!
//! [`CatalogError::Store`]: bookcase_core::CatalogError::Store

use bookcase_core::CatalogError;
use redis::RedisError;

/// Error type for Redis backend operations.
///
/// Wraps errors from the underlying [`redis`] crate: connection failures,
/// protocol errors, authentication failures, and command execution errors.
/// The connection is established lazily, so an unreachable server typically
/// surfaces on the first list operation rather than at build time.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error from the underlying Redis client.
    #[error("Redis backend error: {0}")]
    Redis(#[from] RedisError),
}

impl From<Error> for CatalogError {
    fn from(error: Error) -> Self {
        CatalogError::store(error.to_string())
    }
}
