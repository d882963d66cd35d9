#![warn(missing_docs)]
//! # bookcase-elastic
//!
//! Elasticsearch implementation of the bookcase document store.
//!
//! [`ElasticStore`] is a thin REST adapter: it translates the opaque
//! [`DocumentStore`] operations into the document and search endpoints of
//! the Elasticsearch HTTP API and hands payloads through as raw JSON.
//! Queries and aggregation requests are executed verbatim; composition
//! lives in `bookcase-core`, and this crate never inspects predicates or
//! results beyond lifting out `_source` and `aggregations`.
//!
//! [`DocumentStore`]: bookcase_core::DocumentStore

pub mod error;
pub mod store;

#[doc(inline)]
pub use crate::error::Error;
#[doc(inline)]
pub use crate::store::{ElasticStore, ElasticStoreBuilder};
