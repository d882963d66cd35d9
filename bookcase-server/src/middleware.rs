//! Activity-recording middleware.
//!
//! Records `{method, route}` for the requesting user before dispatching to
//! the handler. Recording is best-effort telemetry: a missing `username`
//! parameter skips the record, a cache failure is logged at warn level, and
//! in neither case does the primary request fail.

use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use bookcase_core::UserActivityRecord;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::SharedState;

/// Query parameters the middleware cares about.
#[derive(Debug, Deserialize)]
pub struct ActivityParams {
    username: Option<String>,
}

/// Record the operation under the requesting user's key, then dispatch.
pub async fn record_activity(
    State(state): State<SharedState>,
    Query(params): Query<ActivityParams>,
    request: Request,
    next: Next,
) -> Response {
    match params.username.as_deref() {
        Some(username) if !username.is_empty() => {
            let record = UserActivityRecord::new(request.method().as_str(), request.uri().path());
            if let Err(error) = state.activity.write(username, &record).await {
                warn!(%error, username, "failed to record user activity");
            }
        }
        _ => debug!("no 'username' parameter, skipping activity record"),
    }
    next.run(request).await
}
