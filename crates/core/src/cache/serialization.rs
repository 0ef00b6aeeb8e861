//! Pure functions for the on-disk cache formats.
//!
//! The snapshot payload is a JSON array of names. The expiry marker is a
//! single ISO-8601 timestamp in UTC with millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::roster::RosterSnapshot;

use super::{CacheError, Result};

/// Serializes a roster snapshot to JSON bytes.
pub fn serialize_snapshot(snapshot: &RosterSnapshot) -> Result<Vec<u8>> {
    serde_json::to_vec(snapshot).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes to a roster snapshot.
///
/// Corrupt payloads are reported as a cache miss.
pub fn deserialize_snapshot(bytes: &[u8]) -> Result<RosterSnapshot> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Miss(format!("invalid payload: {e}")))
}

/// Formats an expiry deadline as marker text (`2024-06-15T11:30:00.000Z`).
pub fn format_expiry(expires_at: &DateTime<Utc>) -> String {
    expires_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses marker text back into a deadline.
///
/// Accepts any RFC 3339 offset and surrounding whitespace. Returns `None`
/// for anything unparseable.
pub fn parse_expiry(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Computes the deadline for a snapshot written at `now`.
pub fn expiry_after(now: DateTime<Utc>, ttl: std::time::Duration) -> DateTime<Utc> {
    let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
    now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn serialize_then_deserialize_snapshot() {
        let snapshot: RosterSnapshot = ["Alice", "Bob"].into_iter().collect();
        let bytes = serialize_snapshot(&snapshot).unwrap();
        assert_eq!(deserialize_snapshot(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn deserialize_corrupt_payload_is_a_miss() {
        let result = deserialize_snapshot(b"{not json");
        assert!(matches!(result, Err(CacheError::Miss(_))));
    }

    #[test]
    fn deserialize_wrong_shape_is_a_miss() {
        let result = deserialize_snapshot(br#"{"entries": 3}"#);
        assert!(matches!(result, Err(CacheError::Miss(_))));
    }

    #[test]
    fn format_expiry_uses_millis_and_z() {
        assert_eq!(format_expiry(&fixed_timestamp()), "2024-06-15T10:30:00.000Z");
    }

    #[test]
    fn parse_expiry_accepts_offsets_and_whitespace() {
        assert_eq!(
            parse_expiry("2024-06-15T12:30:00+02:00\n"),
            Some(fixed_timestamp())
        );
        assert_eq!(parse_expiry(&format_expiry(&fixed_timestamp())), Some(fixed_timestamp()));
    }

    #[test]
    fn parse_expiry_rejects_garbage() {
        assert_eq!(parse_expiry(""), None);
        assert_eq!(parse_expiry("tomorrow"), None);
    }

    #[test]
    fn expiry_after_adds_ttl() {
        let expires = expiry_after(fixed_timestamp(), Duration::from_secs(3600));
        assert_eq!(expires, Utc.with_ymd_and_hms(2024, 6, 15, 11, 30, 0).unwrap());
    }
}
