//! Redis activity backend implementation.

use async_trait::async_trait;
use bookcase_core::{ActivityBackend, CatalogResult};
use redis::{Client, aio::ConnectionManager};
use tokio::sync::OnceCell;
use tracing::trace;

use crate::error::Error;

/// Redis activity store based on the redis-rs crate.
///
/// Implements [`ActivityBackend`] over Redis lists: `push_front` is LPUSH,
/// `trim` is LTRIM, `range` is LRANGE, so an absent key already reads as an
/// empty list at the protocol level. Network interaction goes through a
/// [`ConnectionManager`] created lazily on first use.
///
/// [`ConnectionManager`]: redis::aio::ConnectionManager
/// [`ActivityBackend`]: bookcase_core::ActivityBackend
#[derive(Clone)]
pub struct RedisActivityStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisActivityStore {
    /// Create a new store instance with default settings.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a new [`RedisActivityStore`] builder with default settings.
    #[must_use]
    pub fn builder() -> RedisActivityStoreBuilder {
        RedisActivityStoreBuilder::default()
    }

    /// Create lazy connection to redis via [`ConnectionManager`].
    ///
    /// [`ConnectionManager`]: redis::aio::ConnectionManager
    async fn connection(&self) -> Result<&ConnectionManager, Error> {
        trace!("Get connection manager");
        let manager = self
            .connection
            .get_or_try_init(|| {
                trace!("Initialize new redis connection manager");
                self.client.get_connection_manager()
            })
            .await?;
        Ok(manager)
    }
}

/// Part of builder pattern implementation for [`RedisActivityStore`].
pub struct RedisActivityStoreBuilder {
    connection_info: String,
}

impl Default for RedisActivityStoreBuilder {
    fn default() -> Self {
        Self {
            connection_info: "redis://127.0.0.1/".to_owned(),
        }
    }
}

impl RedisActivityStoreBuilder {
    /// Set connection info (host, port, database, etc.) for the store.
    pub fn server(mut self, connection_info: impl Into<String>) -> Self {
        self.connection_info = connection_info.into();
        self
    }

    /// Create new instance of the Redis store with passed settings.
    pub fn build(self) -> Result<RedisActivityStore, Error> {
        Ok(RedisActivityStore {
            client: Client::open(self.connection_info)?,
            connection: OnceCell::new(),
        })
    }
}

#[async_trait]
impl ActivityBackend for RedisActivityStore {
    async fn push_front(&self, key: &str, value: &str) -> CatalogResult<()> {
        let mut con = self.connection().await?.clone();
        redis::cmd("LPUSH")
            .arg(key)
            .arg(value)
            .query_async::<()>(&mut con)
            .await
            .map_err(Error::from)?;
        Ok(())
    }

    async fn trim(&self, key: &str, start: isize, stop: isize) -> CatalogResult<()> {
        let mut con = self.connection().await?.clone();
        redis::cmd("LTRIM")
            .arg(key)
            .arg(start)
            .arg(stop)
            .query_async::<()>(&mut con)
            .await
            .map_err(Error::from)?;
        Ok(())
    }

    async fn range(&self, key: &str, start: isize, stop: isize) -> CatalogResult<Vec<String>> {
        let mut con = self.connection().await?.clone();
        let entries: Vec<String> = redis::cmd("LRANGE")
            .arg(key)
            .arg(start)
            .arg(stop)
            .query_async(&mut con)
            .await
            .map_err(Error::from)?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_with_default_settings() {
        assert!(RedisActivityStore::new().is_ok());
    }

    #[test]
    fn build_with_invalid_url_fails() {
        let result = RedisActivityStore::builder()
            .server("not-a-valid-url")
            .build();
        assert!(result.is_err());
    }
}
