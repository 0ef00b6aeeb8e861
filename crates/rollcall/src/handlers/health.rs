//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Reports when the roster cache expires

use axum::{extract::State, http::StatusCode, Json};

use crate::{models::HealthResponse, state::AppState};

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Roster cache deadline, `null` when there is none.
///
/// Reads only the expiry marker; never touches the spreadsheet.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.roster.cache_expires_at().await))
}
