//! Catalog facade: the stable operation contract over the document store.

use serde_json::json;
use tracing::{debug, warn};

use crate::{
    Book, BookId, CatalogError, CatalogResult, CatalogStats, DocumentStore, SearchFilter,
    StoreOutcome, query, stats,
};

/// Page size used for search execution.
///
/// The operation contract has no paging; a single page covers the index.
const SEARCH_PAGE_SIZE: usize = 10_000;

/// Orchestrates query composition and statistics against the document store
/// and exposes the operation contract used by request handlers.
///
/// Holds no state beyond the injected store handle; cheap to clone and safe
/// to share across in-flight requests.
#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
}

impl<S: DocumentStore> CatalogService<S> {
    /// Create a facade over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store a new book, returning the store-assigned identifier.
    ///
    /// Field-level validation of the book is the request layer's concern;
    /// by the time a [`Book`] exists it is structurally complete.
    pub async fn create(&self, book: &Book) -> CatalogResult<BookId> {
        let document = serde_json::to_value(book)?;
        let id = self.store.index(&document).await?;
        debug!(%id, "indexed new book");
        Ok(BookId::new(id))
    }

    /// Update only the title of the addressed book.
    ///
    /// Updating an absent id reports [`CatalogError::NotFound`].
    pub async fn update_title(&self, id: &BookId, new_title: &str) -> CatalogResult<()> {
        let fields = json!({ "title": new_title });
        match self.store.update_partial(id.as_str(), &fields).await? {
            StoreOutcome::Applied => Ok(()),
            StoreOutcome::Missing => Err(unknown_id(id)),
        }
    }

    /// Fetch a book by identifier.
    ///
    /// A zero-hit lookup is [`CatalogError::NotFound`], distinct from a
    /// store failure.
    pub async fn get_by_id(&self, id: &BookId) -> CatalogResult<Book> {
        let document = self
            .store
            .get(id.as_str())
            .await?
            .ok_or_else(|| unknown_id(id))?;
        Ok(serde_json::from_value(document)?)
    }

    /// Delete a book by identifier.
    ///
    /// Deleting an absent id reports [`CatalogError::NotFound`] rather than
    /// succeeding as a no-op.
    pub async fn delete_by_id(&self, id: &BookId) -> CatalogResult<()> {
        match self.store.delete(id.as_str()).await? {
            StoreOutcome::Applied => Ok(()),
            StoreOutcome::Missing => Err(unknown_id(id)),
        }
    }

    /// Execute a filtered search.
    ///
    /// Filters with zero active predicates are rejected before composition
    /// and before any store interaction. A hit that fails to decode is
    /// skipped with a warning rather than aborting the result set.
    pub async fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<Book>> {
        if !filter.has_criteria() {
            return Err(CatalogError::Validation(
                "no search criteria supplied".to_owned(),
            ));
        }

        let predicate = query::compose(filter)?;
        let hits = self.store.query(&predicate, SEARCH_PAGE_SIZE).await?;

        let mut books = Vec::with_capacity(hits.len());
        for hit in hits {
            match serde_json::from_value::<Book>(hit) {
                Ok(book) => books.push(book),
                Err(error) => warn!(%error, "skipping undecodable search hit"),
            }
        }
        Ok(books)
    }

    /// Distinct-book and distinct-author counts over the whole collection.
    pub async fn stats(&self) -> CatalogResult<CatalogStats> {
        let raw = self.store.aggregate(&stats::build_request()).await?;
        stats::parse_response(&raw)
    }
}

fn unknown_id(id: &BookId) -> CatalogError {
    CatalogError::NotFound(format!("book with id '{id}' not found"))
}
