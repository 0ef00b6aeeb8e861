use std::{env, path::PathBuf, time::Duration};

use rollcall_core::config::{parse_ttl_hours, ConfigError};
use rollcall_sheets::SheetsConfig;

/// Application configuration loaded from environment variables.
///
/// Validated once at startup; components receive the pieces they need.
#[derive(Debug, Clone)]
pub struct Config {
    pub sheets: SheetsConfig,
    /// Directory holding `cache.json` and its expiry marker.
    pub cache_dir: PathBuf,
    /// Roster cache lifetime (default: 1 hour)
    pub cache_ttl: Duration,
    /// Path to SQLite database file (default: "rollcall.db")
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables, besides those read by [`SheetsConfig`]:
    /// - `CACHE_FILE_PATH` - Roster cache directory (required)
    /// - `CACHE_EXPIRE_TIME` - Cache TTL in hours (default: 1)
    /// - `SQLITE_PATH` - SQLite database path (default: "rollcall.db")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sheets = SheetsConfig::from_lookup(&lookup)?;

        let cache_dir = lookup("CACHE_FILE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("CACHE_FILE_PATH"))?;

        let cache_ttl = parse_ttl_hours(
            "CACHE_EXPIRE_TIME",
            lookup("CACHE_EXPIRE_TIME").as_deref(),
        )?;

        let sqlite_path = lookup("SQLITE_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "rollcall.db".to_string());

        Ok(Self {
            sheets,
            cache_dir,
            cache_ttl,
            sqlite_path,
        })
    }
}
