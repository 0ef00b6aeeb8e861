use chrono::{DateTime, Utc};

use super::RosterEntry;

/// Reduce spreadsheet rows to their first column.
///
/// Rows whose first cell is missing or blank are skipped rather than
/// emitted as empty names. Row order and duplicates are preserved.
pub fn first_column<I, R>(rows: I) -> Vec<RosterEntry>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    rows.into_iter()
        .filter_map(|row| row.into_iter().next())
        .filter(|cell| !cell.trim().is_empty())
        .map(RosterEntry::from)
        .collect()
}

/// A cache is expired unless `now` is strictly before its deadline.
pub fn is_expired(now: DateTime<Utc>, expires_at: DateTime<Utc>) -> bool {
    now >= expires_at
}
