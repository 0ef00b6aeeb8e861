//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rollcall_core::storage::AttendanceRecord;
use rusqlite::Row;

/// Convert a SQLite row to an AttendanceRecord.
///
/// Expected columns: name, member, date, created_at
pub fn row_to_attendance(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    let name: String = row.get(0)?;
    let member: bool = row.get(1)?;
    let date: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(AttendanceRecord {
        name,
        member,
        date: parse_date(&date)?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime for SQLite storage.
///
/// Fixed microsecond precision keeps the text sortable.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
