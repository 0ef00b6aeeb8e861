use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rollcall_core::serde::{
    deserialize_lenient_date, deserialize_optional_flag, deserialize_optional_string,
};
use rollcall_core::storage::AttendanceRecord;

/// Query parameters for listing attendance.
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceQuery {
    /// Day to list; blank or malformed means today.
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date: Option<NaiveDate>,
}

/// Request payload for marking someone present today.
#[derive(Debug, Deserialize)]
pub struct MarkAttendance {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    /// `"true"` for roster members, anything else for guests.
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub member: Option<bool>,
}

/// Request payload for removing today's attendance.
#[derive(Debug, Deserialize)]
pub struct UnmarkAttendance {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

/// One attendee as returned by `GET /attendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub member: bool,
    pub date: NaiveDate,
}

impl From<AttendanceRecord> for Attendee {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            name: record.name,
            member: record.member,
            date: record.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_attendance_guest_and_missing() {
        let guest: MarkAttendance =
            serde_json::from_str(r#"{"name": "Guest", "member": "false"}"#).unwrap();
        assert_eq!(guest.member, Some(false));

        let missing: MarkAttendance = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert_eq!(missing.name, None);
        assert_eq!(missing.member, None);
    }

    #[test]
    fn test_attendee_drops_created_at() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let attendee = Attendee::from(AttendanceRecord::new("Alice", true, date));
        assert_eq!(
            serde_json::to_value(&attendee).unwrap(),
            serde_json::json!({"name": "Alice", "member": true, "date": "2024-06-15"})
        );
    }
}
