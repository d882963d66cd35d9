//! Search filter over the catalog.

use serde::Deserialize;

/// Optional search predicates, AND-ed together at composition time.
///
/// Absent fields impose no constraint; an empty string is treated the same
/// as an absent field, not as a match against the empty string. The price
/// bounds are kept as the raw strings received from the query layer so that
/// a malformed number surfaces as a validation error during composition
/// instead of being silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchFilter {
    /// Free-text title match.
    pub title: Option<String>,
    /// Free-text author-name match.
    pub author_name: Option<String>,
    /// Inclusive lower price bound, unparsed.
    pub min_price: Option<String>,
    /// Inclusive upper price bound, unparsed.
    pub max_price: Option<String>,
}

impl SearchFilter {
    /// True when at least one predicate is present and non-empty.
    pub fn has_criteria(&self) -> bool {
        [
            &self.title,
            &self.author_name,
            &self.min_price,
            &self.max_price,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }
}
