//! Configuration errors and value parsing.
//!
//! Reading the environment happens in the server and adapter crates; the
//! parsing rules live here so they can be tested without touching it.

use std::time::Duration;

use thiserror::Error;

/// Default cache lifetime in hours.
pub const DEFAULT_CACHE_TTL_HOURS: u64 = 1;

/// Longest accepted cache lifetime in hours (100 years).
///
/// Keeps every computed deadline inside the range the expiry marker can
/// be written and read back.
pub const MAX_CACHE_TTL_HOURS: u64 = 24 * 365 * 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("\"{0}\" is not defined in environment variables")]
    Missing(&'static str),
    #[error("invalid value for \"{var}\": {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Parse a cache TTL expressed in whole hours.
///
/// `None` falls back to [`DEFAULT_CACHE_TTL_HOURS`]. Zero, non-numeric and
/// values above [`MAX_CACHE_TTL_HOURS`] are rejected.
pub fn parse_ttl_hours(var: &'static str, raw: Option<&str>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Duration::from_secs(DEFAULT_CACHE_TTL_HOURS * 60 * 60));
    };

    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            reason: "must be at least 1 hour".to_string(),
        }),
        Ok(h) => hours(h)
            .filter(|_| h <= MAX_CACHE_TTL_HOURS)
            .ok_or_else(|| ConfigError::Invalid {
                var,
                reason: format!("must be at most {MAX_CACHE_TTL_HOURS} hours"),
            }),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

/// Turn escaped `\n` sequences in a PEM key into real newlines.
///
/// Keys pasted into a single-line environment variable usually arrive this way.
pub fn normalize_private_key(raw: &str) -> String {
    raw.trim().replace("\\n", "\n")
}

fn hours(h: u64) -> Option<Duration> {
    h.checked_mul(60 * 60).map(Duration::from_secs)
}
