//! Request handlers for the catalog and activity routes.
//!
//! Handlers bind parameters, call into the core operation contract, and
//! shape the response bodies; no catalog logic lives here.

use axum::Json;
use axum::extract::{Path, Query, State};
use bookcase_core::{Book, BookId, CatalogStats, SearchFilter, UserActivityRecord};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::state::SharedState;

/// `PUT /book`
pub async fn create_book(
    State(state): State<SharedState>,
    Json(book): Json<Book>,
) -> ApiResult<Json<Value>> {
    let id = state.catalog.create(&book).await?;
    Ok(Json(json!({ "status": "created", "id": id })))
}

/// Body of a title update; the only mutable field of a book.
#[derive(Debug, Deserialize)]
pub struct UpdateTitle {
    title: String,
}

/// `POST /book/{id}`
pub async fn update_book_title(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(update): Json<UpdateTitle>,
) -> ApiResult<Json<Value>> {
    state
        .catalog
        .update_title(&BookId::new(id), &update.title)
        .await?;
    Ok(Json(json!({ "status": "updated" })))
}

/// `GET /book/{id}`
pub async fn get_book(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    Ok(Json(state.catalog.get_by_id(&BookId::new(id)).await?))
}

/// `DELETE /book/{id}`
pub async fn delete_book(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = BookId::new(id);
    state.catalog.delete_by_id(&id).await?;
    Ok(Json(json!({ "status": "deleted", "id": id })))
}

/// `GET /search`
pub async fn search_books(
    State(state): State<SharedState>,
    Query(filter): Query<SearchFilter>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.catalog.search(&filter).await?))
}

/// `GET /store`
pub async fn store_stats(State(state): State<SharedState>) -> ApiResult<Json<CatalogStats>> {
    Ok(Json(state.catalog.stats().await?))
}

/// `GET /activity/{username}`
pub async fn user_activity(
    State(state): State<SharedState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<UserActivityRecord>>> {
    Ok(Json(state.activity.read(&username).await?))
}
