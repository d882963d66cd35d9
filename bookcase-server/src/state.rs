//! Shared application state.

use std::sync::Arc;

use bookcase_core::{ActivityCache, CatalogService};
use bookcase_elastic::ElasticStore;
use bookcase_redis::RedisActivityStore;

/// Everything a handler needs, assembled once at startup.
///
/// The store clients are built and injected by the process entry point,
/// which owns their lifecycle; handlers and middleware only borrow through
/// the shared [`Arc`].
pub struct AppState {
    /// Catalog operations over the document store.
    pub catalog: CatalogService<ElasticStore>,
    /// Bounded per-user activity history.
    pub activity: ActivityCache<RedisActivityStore>,
}

/// Handle to [`AppState`] shared across in-flight requests.
pub type SharedState = Arc<AppState>;
