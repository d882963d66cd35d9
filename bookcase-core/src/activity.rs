//! Bounded per-user activity history.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{CatalogError, CatalogResult};

/// Default number of records kept per user key.
pub const DEFAULT_CAPACITY: usize = 3;

/// One recorded API operation, the unit of history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivityRecord {
    /// HTTP method of the recorded request.
    pub method: String,
    /// Route path of the recorded request.
    pub route: String,
}

impl UserActivityRecord {
    /// Record an operation.
    pub fn new(method: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            route: route.into(),
        }
    }
}

/// Key-value list store used for history storage.
///
/// Exactly the three list operations the cache needs, keyed by an opaque
/// string (the username) and addressing the whole list at that key.
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait ActivityBackend: Send + Sync {
    /// Prepend a value to the list at `key`, creating the list if absent.
    async fn push_front(&self, key: &str, value: &str) -> CatalogResult<()>;

    /// Keep only the elements of the list at `key` with indices in
    /// `[start, stop]`, both inclusive.
    async fn trim(&self, key: &str, start: isize, stop: isize) -> CatalogResult<()>;

    /// Fetch the elements of the list at `key` with indices in
    /// `[start, stop]`, front first. An absent key is an empty list.
    async fn range(&self, key: &str, start: isize, stop: isize) -> CatalogResult<Vec<String>>;
}

#[async_trait]
impl<B: ActivityBackend + ?Sized> ActivityBackend for Arc<B> {
    async fn push_front(&self, key: &str, value: &str) -> CatalogResult<()> {
        (**self).push_front(key, value).await
    }

    async fn trim(&self, key: &str, start: isize, stop: isize) -> CatalogResult<()> {
        (**self).trim(key, start, stop).await
    }

    async fn range(&self, key: &str, start: isize, stop: isize) -> CatalogResult<Vec<String>> {
        (**self).range(key, start, stop).await
    }
}

/// Bounded, newest-first history of [`UserActivityRecord`] per user key.
///
/// Writes are push-then-trim: two operations against the backend, not one
/// atomic step. Between the push and the trim a concurrent reader may
/// observe more than `capacity` entries; after any writer's trim completes
/// the list is back within capacity. A backend offering an atomic bounded
/// push could collapse the two steps and close that window.
///
/// The cache owns nothing but the backend handle and the capacity; it is
/// cheap to clone and safe to share across in-flight requests.
#[derive(Debug, Clone)]
pub struct ActivityCache<B> {
    backend: B,
    capacity: usize,
}

impl<B: ActivityBackend> ActivityCache<B> {
    /// Create a cache with [`DEFAULT_CAPACITY`].
    pub fn new(backend: B) -> Self {
        Self::with_capacity(backend, DEFAULT_CAPACITY)
    }

    /// Create a cache keeping `capacity` records per key.
    ///
    /// # Panics
    ///
    /// Panics when `capacity` is zero; a zero-capacity history cannot hold
    /// the record it was just asked to write.
    pub fn with_capacity(backend: B, capacity: usize) -> Self {
        assert!(capacity >= 1, "activity capacity must be at least 1");
        Self { backend, capacity }
    }

    /// The configured per-key capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Serialize `record`, prepend it to the history for `key`, then trim
    /// the history to capacity.
    ///
    /// A record that cannot be serialized is reported before any store
    /// interaction. A trim failure is reported but does not roll back the
    /// push: the new record stays visible, possibly alongside excess old
    /// entries, until a later write trims again.
    pub async fn write(&self, key: &str, record: &UserActivityRecord) -> CatalogResult<()> {
        let value = serde_json::to_string(record)?;
        self.backend.push_front(key, &value).await?;
        self.backend
            .trim(key, 0, self.capacity as isize - 1)
            .await
    }

    /// Read the history for `key`, newest first, at most `capacity` entries.
    ///
    /// A key that was never written yields an empty vector, not an error. An
    /// entry that does not decode as a [`UserActivityRecord`] means foreign
    /// data under the key and is reported as a serialization error.
    pub async fn read(&self, key: &str) -> CatalogResult<Vec<UserActivityRecord>> {
        let entries = self
            .backend
            .range(key, 0, self.capacity as isize - 1)
            .await?;
        entries
            .iter()
            .map(|entry| serde_json::from_str(entry).map_err(CatalogError::from))
            .collect()
    }
}
