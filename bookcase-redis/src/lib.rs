#![warn(missing_docs)]
//! # bookcase-redis
//!
//! Redis implementation of the bookcase activity-history backend.
//!
//! [`RedisActivityStore`] maps the three list operations of
//! [`ActivityBackend`] onto the LPUSH, LTRIM, and LRANGE commands over a
//! lazily-initialized [`ConnectionManager`]. The store is cheap to clone and
//! safe to share across in-flight requests.
//!
//! [`ActivityBackend`]: bookcase_core::ActivityBackend
//! [`ConnectionManager`]: redis::aio::ConnectionManager

pub mod backend;
pub mod error;

#[doc(inline)]
pub use crate::backend::{RedisActivityStore, RedisActivityStoreBuilder};
#[doc(inline)]
pub use crate::error::Error;
