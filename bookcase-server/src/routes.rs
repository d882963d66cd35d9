//! Router assembly.

use axum::routing::{get, post, put};
use axum::{Router, middleware};

use crate::handlers;
use crate::middleware::record_activity;
use crate::state::SharedState;

/// Assemble the application router over the shared state.
///
/// Every catalog route passes through the activity-recording middleware;
/// reading the activity history does not record itself.
pub fn router(state: SharedState) -> Router {
    let recorded = Router::new()
        .route("/book", put(handlers::create_book))
        .route(
            "/book/{id}",
            post(handlers::update_book_title)
                .get(handlers::get_book)
                .delete(handlers::delete_book),
        )
        .route("/search", get(handlers::search_books))
        .route("/store", get(handlers::store_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            record_activity,
        ));

    Router::new()
        .merge(recorded)
        .route("/activity/{username}", get(handlers::user_activity))
        .with_state(state)
}
