//! Elasticsearch document-store implementation.

use async_trait::async_trait;
use bookcase_core::{CatalogResult, DocumentStore, StoreOutcome};
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use tracing::trace;

use crate::error::Error;

/// Elasticsearch document store speaking the REST API via [`reqwest`].
///
/// One instance addresses one index. The underlying [`Client`] pools
/// connections and is cheap to clone, so the store can be shared across
/// in-flight requests. Every operation is a single bounded round trip; the
/// adapter imposes no retries or deadlines of its own.
#[derive(Debug, Clone)]
pub struct ElasticStore {
    client: Client,
    server: String,
    index: String,
}

impl ElasticStore {
    /// Creates a new [`ElasticStore`] builder with default settings.
    #[must_use]
    pub fn builder() -> ElasticStoreBuilder {
        ElasticStoreBuilder::default()
    }

    /// The name of the index this store addresses.
    pub fn index_name(&self) -> &str {
        &self.index
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{path}", self.server, self.index)
    }

    async fn expect_success(response: Response) -> Result<Value, Error> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    async fn index_document(&self, document: &Value) -> Result<String, Error> {
        let response = self
            .client
            .post(self.url("_doc"))
            .json(document)
            .send()
            .await?;
        let body = Self::expect_success(response).await?;
        body.get("_id")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::MalformedResponse("missing '_id' in index acknowledgement".to_owned())
            })
    }

    async fn get_document(&self, id: &str) -> Result<Option<Value>, Error> {
        let response = self
            .client
            .get(self.url(&format!("_doc/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let mut body = Self::expect_success(response).await?;
        match body.get_mut("_source") {
            Some(source) => Ok(Some(source.take())),
            None => Err(Error::MalformedResponse(
                "missing '_source' in document response".to_owned(),
            )),
        }
    }

    async fn update_document(&self, id: &str, fields: &Value) -> Result<StoreOutcome, Error> {
        let response = self
            .client
            .post(self.url(&format!("_update/{id}")))
            .json(&json!({ "doc": fields }))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(StoreOutcome::Missing);
        }
        Self::expect_success(response).await?;
        Ok(StoreOutcome::Applied)
    }

    async fn delete_document(&self, id: &str) -> Result<StoreOutcome, Error> {
        let response = self
            .client
            .delete(self.url(&format!("_doc/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(StoreOutcome::Missing);
        }
        Self::expect_success(response).await?;
        Ok(StoreOutcome::Applied)
    }

    async fn run_query(&self, predicate: &Value, page_size: usize) -> Result<Vec<Value>, Error> {
        trace!(index = %self.index, "execute search");
        let body = json!({ "query": predicate, "size": page_size });
        let response = self
            .client
            .post(self.url("_search"))
            .json(&body)
            .send()
            .await?;
        let mut body = Self::expect_success(response).await?;
        let hits = body
            .pointer_mut("/hits/hits")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| {
                Error::MalformedResponse("missing 'hits' in search response".to_owned())
            })?;
        Ok(hits
            .iter_mut()
            .filter_map(|hit| hit.get_mut("_source").map(Value::take))
            .collect())
    }

    async fn run_aggregation(&self, spec: &Value) -> Result<Value, Error> {
        trace!(index = %self.index, "execute aggregation");
        let response = self
            .client
            .post(self.url("_search"))
            .json(spec)
            .send()
            .await?;
        let mut body = Self::expect_success(response).await?;
        body.get_mut("aggregations")
            .map(Value::take)
            .ok_or_else(|| {
                Error::MalformedResponse("missing 'aggregations' in search response".to_owned())
            })
    }
}

/// Part of builder pattern implementation for [`ElasticStore`].
pub struct ElasticStoreBuilder {
    server: String,
    index: String,
}

impl Default for ElasticStoreBuilder {
    fn default() -> Self {
        Self {
            server: "http://127.0.0.1:9200".to_owned(),
            index: "books".to_owned(),
        }
    }
}

impl ElasticStoreBuilder {
    /// Set the base URL of the search service.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        let server: String = server.into();
        self.server = server.trim_end_matches('/').to_owned();
        self
    }

    /// Set the index the store addresses.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Create new instance of the store with passed settings.
    pub fn build(self) -> ElasticStore {
        ElasticStore {
            client: Client::new(),
            server: self.server,
            index: self.index,
        }
    }
}

#[async_trait]
impl DocumentStore for ElasticStore {
    async fn index(&self, document: &Value) -> CatalogResult<String> {
        Ok(self.index_document(document).await?)
    }

    async fn get(&self, id: &str) -> CatalogResult<Option<Value>> {
        Ok(self.get_document(id).await?)
    }

    async fn update_partial(&self, id: &str, fields: &Value) -> CatalogResult<StoreOutcome> {
        Ok(self.update_document(id, fields).await?)
    }

    async fn delete(&self, id: &str) -> CatalogResult<StoreOutcome> {
        Ok(self.delete_document(id).await?)
    }

    async fn query(&self, predicate: &Value, page_size: usize) -> CatalogResult<Vec<Value>> {
        Ok(self.run_query(predicate, page_size).await?)
    }

    async fn aggregate(&self, spec: &Value) -> CatalogResult<Value> {
        Ok(self.run_aggregation(spec).await?)
    }
}
