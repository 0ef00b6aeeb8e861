use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One person marked present on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    /// Whether the person is on the roster, as opposed to a guest.
    pub member: bool,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn new(name: impl Into<String>, member: bool, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            member,
            date,
            created_at: Utc::now(),
        }
    }

    /// Identifier used in error messages and logs.
    pub fn key(&self) -> String {
        format!("{}@{}", self.name, self.date.format("%Y-%m-%d"))
    }
}
