//! Search-query composition.
//!
//! Builds the structured predicate sent to the document store from a
//! [`SearchFilter`]. Composition is the logical AND of every present
//! sub-predicate; absent or empty fields contribute no term, so an empty
//! filter composes to an unconstrained match (AND of zero terms). Rejecting
//! empty filters is the caller's concern, not the composer's; see
//! [`CatalogService::search`].
//!
//! [`CatalogService::search`]: crate::CatalogService::search

use serde_json::{Map, Value, json};

use crate::{CatalogError, SearchFilter};

/// Compose the filter into a single `bool`/`must` predicate.
///
/// The free-text fields are matched with the analyzed `match` form rather
/// than an exact keyword term: the input may arrive partial and
/// HTML-escaped from a web form, so both fields are entity-unescaped before
/// matching. A price bound that does not parse as a number is a
/// [`CatalogError::Validation`], distinct from an absent bound; when both
/// bounds are present they fold into one range term. An inverted range
/// composes as-is and matches nothing.
///
/// The returned predicate is passed verbatim to the store's query call;
/// composition never executes queries and never sees results.
pub fn compose(filter: &SearchFilter) -> Result<Value, CatalogError> {
    let mut must = Vec::new();

    if let Some(title) = present(&filter.title) {
        must.push(json!({ "match": { "title": unescape(title) } }));
    }
    if let Some(author_name) = present(&filter.author_name) {
        must.push(json!({ "match": { "author_name": unescape(author_name) } }));
    }

    let mut price_range = Map::new();
    if let Some(min_price) = present(&filter.min_price) {
        price_range.insert("gte".to_owned(), json!(parse_price("min_price", min_price)?));
    }
    if let Some(max_price) = present(&filter.max_price) {
        price_range.insert("lte".to_owned(), json!(parse_price("max_price", max_price)?));
    }
    if !price_range.is_empty() {
        must.push(json!({ "range": { "price": price_range } }));
    }

    Ok(json!({ "bool": { "must": must } }))
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn unescape(value: &str) -> String {
    html_escape::decode_html_entities(value).into_owned()
}

fn parse_price(field: &str, value: &str) -> Result<f64, CatalogError> {
    value.parse().map_err(|_| {
        CatalogError::Validation(format!("'{field}' is not a valid number: '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filter() -> SearchFilter {
        SearchFilter::default()
    }

    #[test]
    fn title_alone_constrains_only_title() {
        let predicate = compose(&SearchFilter {
            title: Some("Dune".to_owned()),
            ..filter()
        })
        .unwrap();

        assert_eq!(
            predicate,
            json!({ "bool": { "must": [ { "match": { "title": "Dune" } } ] } })
        );
    }

    #[test]
    fn empty_filter_composes_to_unconstrained_match() {
        let predicate = compose(&filter()).unwrap();
        assert_eq!(predicate, json!({ "bool": { "must": [] } }));
    }

    #[test]
    fn blank_fields_contribute_no_term() {
        let predicate = compose(&SearchFilter {
            title: Some(String::new()),
            author_name: Some(String::new()),
            ..filter()
        })
        .unwrap();
        assert_eq!(predicate, json!({ "bool": { "must": [] } }));
    }

    #[test]
    fn text_fields_are_entity_unescaped() {
        let predicate = compose(&SearchFilter {
            title: Some("Of Mice &amp; Men".to_owned()),
            author_name: Some("O&#39;Brien".to_owned()),
            ..filter()
        })
        .unwrap();

        assert_eq!(
            predicate,
            json!({ "bool": { "must": [
                { "match": { "title": "Of Mice & Men" } },
                { "match": { "author_name": "O'Brien" } },
            ] } })
        );
    }

    #[test]
    fn both_bounds_fold_into_one_range_term() {
        let predicate = compose(&SearchFilter {
            min_price: Some("5".to_owned()),
            max_price: Some("10".to_owned()),
            ..filter()
        })
        .unwrap();

        assert_eq!(
            predicate,
            json!({ "bool": { "must": [
                { "range": { "price": { "gte": 5.0, "lte": 10.0 } } },
            ] } })
        );
    }

    #[test]
    fn single_bound_produces_half_open_range() {
        let predicate = compose(&SearchFilter {
            min_price: Some("7.5".to_owned()),
            ..filter()
        })
        .unwrap();

        assert_eq!(
            predicate,
            json!({ "bool": { "must": [
                { "range": { "price": { "gte": 7.5 } } },
            ] } })
        );
    }

    #[test]
    fn inverted_range_composes_without_error() {
        let predicate = compose(&SearchFilter {
            min_price: Some("10".to_owned()),
            max_price: Some("5".to_owned()),
            ..filter()
        })
        .unwrap();

        assert_eq!(
            predicate,
            json!({ "bool": { "must": [
                { "range": { "price": { "gte": 10.0, "lte": 5.0 } } },
            ] } })
        );
    }

    #[test]
    fn non_numeric_bound_is_a_validation_error() {
        let result = compose(&SearchFilter {
            min_price: Some("abc".to_owned()),
            ..filter()
        });

        assert!(matches!(
            result,
            Err(crate::CatalogError::Validation(message)) if message.contains("min_price")
        ));
    }

    #[test]
    fn all_fields_combine_under_one_bool_must() {
        let predicate = compose(&SearchFilter {
            title: Some("Dune".to_owned()),
            author_name: Some("Herbert".to_owned()),
            min_price: Some("1".to_owned()),
            max_price: Some("200".to_owned()),
        })
        .unwrap();

        let must = predicate["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 3);
    }
}
