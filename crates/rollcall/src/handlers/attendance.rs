use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};

use rollcall_core::storage::{AttendanceRecord, RepositoryError};

use crate::{
    handlers::extract::FormOrJson,
    models::{
        AttendanceQuery, AttendanceResponse, Attendee, MarkAttendance, StatusResponse,
        UnmarkAttendance,
    },
    state::AppState,
};

const ALREADY_ATTENDING: &str = "Already marked as attending";

/// Attendance is always recorded against the server's local day.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// GET /attendance - Everyone recorded for a day (default: today).
#[axum::debug_handler]
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Response {
    let date = query.date.unwrap_or_else(today);

    match state.attendance.get_attending(date).await {
        Ok(records) => {
            let members = records.into_iter().map(Attendee::from).collect();
            Json(AttendanceResponse::success(members)).into_response()
        }
        Err(e) => {
            tracing::error!(date = %date, error = %e, "Failed to list attendance");
            Json(StatusResponse::failed()).into_response()
        }
    }
}

/// POST /attendance - Mark someone present today.
#[axum::debug_handler]
pub async fn mark_attendance(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<MarkAttendance>,
) -> Json<StatusResponse> {
    let (Some(name), Some(member)) = (payload.name, payload.member) else {
        tracing::warn!("Attendance request is missing name or member");
        return Json(StatusResponse::failed());
    };
    let date = today();

    match state.attendance.is_attending(&name, date).await {
        Ok(false) => {}
        Ok(true) => return Json(StatusResponse::failed_with(ALREADY_ATTENDING)),
        Err(e) => {
            tracing::error!(name = %name, error = %e, "Failed to check attendance");
            return Json(StatusResponse::failed());
        }
    }

    let record = AttendanceRecord::new(name, member, date);
    match state.attendance.add_attendance(&record).await {
        Ok(()) => {
            tracing::info!(name = %record.name, member = record.member, "Marked attendance");
            Json(StatusResponse::success())
        }
        // Lost a race with a concurrent request for the same name.
        Err(RepositoryError::AlreadyExists { .. }) => {
            Json(StatusResponse::failed_with(ALREADY_ATTENDING))
        }
        Err(e) => {
            tracing::error!(key = %record.key(), error = %e, "Failed to mark attendance");
            Json(StatusResponse::failed())
        }
    }
}

/// DELETE /attendance - Remove someone from today's attendance.
///
/// Succeeds whether or not the person was recorded.
#[axum::debug_handler]
pub async fn unmark_attendance(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<UnmarkAttendance>,
) -> Json<StatusResponse> {
    let Some(name) = payload.name else {
        tracing::warn!("Attendance removal is missing name");
        return Json(StatusResponse::failed());
    };

    match state.attendance.remove_attendance(&name, today()).await {
        Ok(removed) => {
            tracing::info!(name = %name, removed, "Removed attendance");
            Json(StatusResponse::success())
        }
        Err(e) => {
            tracing::error!(name = %name, error = %e, "Failed to remove attendance");
            Json(StatusResponse::failed())
        }
    }
}
