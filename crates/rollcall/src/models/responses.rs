//! JSON response bodies. Every body carries a `status` field; failures are
//! reported there rather than through the HTTP status code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Attendee;

const SUCCESS: &str = "success";
const FAILED: &str = "failed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: SUCCESS.to_string(),
            reason: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            status: FAILED.to_string(),
            reason: None,
        }
    }

    pub fn failed_with(reason: impl Into<String>) -> Self {
        Self {
            status: FAILED.to_string(),
            reason: Some(reason.into()),
        }
    }
}

/// Body of `GET /members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersResponse {
    pub status: String,
    pub members: Vec<String>,
    pub cached: bool,
}

impl MembersResponse {
    pub fn success(members: Vec<String>, cached: bool) -> Self {
        Self {
            status: SUCCESS.to_string(),
            members,
            cached,
        }
    }
}

/// Body of `GET /attendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    pub status: String,
    pub members: Vec<Attendee>,
    pub cached: bool,
}

impl AttendanceResponse {
    pub fn success(members: Vec<Attendee>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            members,
            cached: false,
        }
    }
}

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub cache_expires_at: Option<DateTime<Utc>>,
}

impl HealthResponse {
    pub fn ok(cache_expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            status: "ok".to_string(),
            cache_expires_at,
        }
    }
}
