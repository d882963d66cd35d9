//! The book domain model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a [`Book`] by the document store on creation.
///
/// Opaque to this crate and immutable once assigned. The identifier is not
/// part of the document source; it travels separately through the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Wrap a raw store identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A catalog document.
///
/// Field names mirror the index mapping. `publish_date` is a calendar date
/// with no time-of-day component, serialized as `YYYY-MM-DD`. Only `title`
/// is mutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Title, required.
    pub title: String,
    /// Author display name.
    pub author_name: String,
    /// Non-negative price.
    pub price: f64,
    /// Whether an ebook edition is available.
    pub ebook_available: bool,
    /// Publication date.
    pub publish_date: NaiveDate,
}
