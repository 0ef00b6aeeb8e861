use axum::{extract::State, Json};

use crate::{models::MembersResponse, state::AppState};

/// GET /members - Roster names and whether they came from the cache.
///
/// Never fails; a degraded lookup answers with an empty list.
#[axum::debug_handler]
pub async fn list_members(State(state): State<AppState>) -> Json<MembersResponse> {
    let roster = state.roster.get_roster().await.into_response();
    Json(MembersResponse::success(
        roster.entries,
        roster.served_from_cache,
    ))
}
