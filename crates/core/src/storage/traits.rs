use async_trait::async_trait;
use chrono::NaiveDate;

use super::{AttendanceRecord, Result};

/// Repository for attendance records, keyed by name and day.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Records an attendance. Fails with `AlreadyExists` if the name is
    /// already recorded for that day.
    async fn add_attendance(&self, record: &AttendanceRecord) -> Result<()>;

    /// Removes an attendance. Returns whether a record was removed.
    async fn remove_attendance(&self, name: &str, date: NaiveDate) -> Result<bool>;

    /// Checks whether a name is recorded for a day.
    async fn is_attending(&self, name: &str, date: NaiveDate) -> Result<bool>;

    /// Gets everyone recorded for a day, in the order they were recorded.
    async fn get_attending(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>>;
}
