//! Corpus statistics via cardinality aggregations.
//!
//! One request, two distinct-count metrics over the whole collection: the
//! number of documents and the number of distinct authors. The request asks
//! for zero documents; only the aggregation results come back.

use serde::Serialize;
use serde_json::{Value, json};

use crate::CatalogError;

const NUMBER_OF_BOOKS: &str = "number_of_books";
const NUMBER_OF_AUTHORS: &str = "number_of_authors";

/// Distinct-value counts over the whole collection at query time.
///
/// Not persisted; recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Cardinality of the document identifier.
    pub number_of_books: u64,
    /// Cardinality of the author name, exact (keyword) form.
    pub number_of_authors: u64,
}

/// Build the aggregation request.
///
/// Zero result documents; cardinality of `_id` keyed `number_of_books` and
/// cardinality of `author_name.keyword` keyed `number_of_authors`.
pub fn build_request() -> Value {
    json!({
        "size": 0,
        "aggs": {
            NUMBER_OF_BOOKS: { "cardinality": { "field": "_id" } },
            NUMBER_OF_AUTHORS: { "cardinality": { "field": "author_name.keyword" } },
        }
    })
}

/// Extract both metrics from the raw aggregation results.
///
/// A missing or malformed metric is a hard [`CatalogError::AggregationMalformed`]:
/// substituting zero would be indistinguishable from an actually-empty
/// collection.
pub fn parse_response(raw: &Value) -> Result<CatalogStats, CatalogError> {
    Ok(CatalogStats {
        number_of_books: metric(raw, NUMBER_OF_BOOKS)?,
        number_of_authors: metric(raw, NUMBER_OF_AUTHORS)?,
    })
}

fn metric(raw: &Value, key: &str) -> Result<u64, CatalogError> {
    raw.get(key)
        .and_then(|aggregation| aggregation.get("value"))
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            CatalogError::AggregationMalformed(format!("missing cardinality metric '{key}'"))
        })
}
