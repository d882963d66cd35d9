//! The document-store seam.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::CatalogResult;

/// Outcome of a store write addressed to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The store applied the operation to an existing document.
    Applied,
    /// The addressed document does not exist.
    Missing,
}

/// Interface to the external search/index service holding the catalog.
///
/// Documents, predicates, and aggregation payloads cross this boundary as
/// raw JSON; implementations translate them to their wire protocol and must
/// be safe for concurrent use by multiple in-flight requests. Every call is
/// a single bounded round trip with no retries and no internal queuing.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a new document, returning the store-assigned identifier.
    async fn index(&self, document: &Value) -> CatalogResult<String>;

    /// Fetch a document source by identifier; `None` when absent.
    async fn get(&self, id: &str) -> CatalogResult<Option<Value>>;

    /// Apply a partial update to the addressed document.
    async fn update_partial(&self, id: &str, fields: &Value) -> CatalogResult<StoreOutcome>;

    /// Delete the addressed document.
    async fn delete(&self, id: &str) -> CatalogResult<StoreOutcome>;

    /// Execute a structured query, returning the source of every hit.
    async fn query(&self, predicate: &Value, page_size: usize) -> CatalogResult<Vec<Value>>;

    /// Execute an aggregation request, returning the raw aggregation results.
    async fn aggregate(&self, spec: &Value) -> CatalogResult<Value>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn index(&self, document: &Value) -> CatalogResult<String> {
        (**self).index(document).await
    }

    async fn get(&self, id: &str) -> CatalogResult<Option<Value>> {
        (**self).get(id).await
    }

    async fn update_partial(&self, id: &str, fields: &Value) -> CatalogResult<StoreOutcome> {
        (**self).update_partial(id, fields).await
    }

    async fn delete(&self, id: &str) -> CatalogResult<StoreOutcome> {
        (**self).delete(id).await
    }

    async fn query(&self, predicate: &Value, page_size: usize) -> CatalogResult<Vec<Value>> {
        (**self).query(predicate, page_size).await
    }

    async fn aggregate(&self, spec: &Value) -> CatalogResult<Value> {
        (**self).aggregate(spec).await
    }
}
