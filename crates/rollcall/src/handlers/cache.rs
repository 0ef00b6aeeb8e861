use axum::{extract::State, Json};

use crate::{models::StatusResponse, state::AppState};

/// GET /clear-cache - Drop the cached roster. Always reports success.
#[axum::debug_handler]
pub async fn clear_cache(State(state): State<AppState>) -> Json<StatusResponse> {
    state.roster.clear_cache().await;
    Json(StatusResponse::success())
}
