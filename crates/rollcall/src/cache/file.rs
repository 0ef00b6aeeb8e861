//! Cache store over two files in one directory.
//!
//! - `cache.json`: the roster snapshot as a JSON array of names
//! - `cache.json.expiry`: the deadline as ISO-8601 text
//!
//! Each file is replaced atomically, but the pair is not: a reader may see
//! the marker of one refresh next to the payload of another.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rollcall_core::cache::{
    deserialize_snapshot, expiry_after, format_expiry, parse_expiry, serialize_snapshot,
    CacheError, CacheStore, Result,
};
use rollcall_core::clock::Clock;
use rollcall_core::roster::RosterSnapshot;

pub const CACHE_FILE: &str = "cache.json";
pub const EXPIRY_FILE: &str = "cache.json.expiry";

pub struct FileCacheStore {
    dir: PathBuf,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl FileCacheStore {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            clock,
        }
    }

    pub fn payload_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE)
    }

    pub fn expiry_path(&self) -> PathBuf {
        self.dir.join(EXPIRY_FILE)
    }
}

/// Write to a uniquely named temp file beside the target, then rename it
/// over the target.
///
/// Concurrent writers each get their own temp file, so the last rename wins
/// and no reader sees a partial file.
async fn write_atomic(path: &Path, contents: Vec<u8>) -> std::io::Result<()> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&contents)?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(std::io::Error::other)?
}

/// Remove a file, treating an already missing file as removed.
async fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn load_expiry(&self) -> Option<DateTime<Utc>> {
        let path = self.expiry_path();
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No cache expiry marker");
                return None;
            }
        };

        let expires_at = parse_expiry(&text);
        if expires_at.is_none() {
            tracing::warn!(path = %path.display(), marker = %text.trim(), "Unreadable cache expiry marker");
        }
        expires_at
    }

    async fn load(&self) -> Result<RosterSnapshot> {
        let path = self.payload_path();
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| CacheError::Miss(format!("{}: {}", path.display(), e)))?;
        deserialize_snapshot(&bytes)
    }

    async fn save(&self, snapshot: &RosterSnapshot) -> Result<()> {
        let bytes = serialize_snapshot(snapshot)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CacheError::Io(format!("{}: {}", self.dir.display(), e)))?;

        let payload = self.payload_path();
        write_atomic(&payload, bytes)
            .await
            .map_err(|e| CacheError::Io(format!("{}: {}", payload.display(), e)))?;

        let expires_at = expiry_after(self.clock.now(), self.ttl);
        let marker = self.expiry_path();
        match write_atomic(&marker, format_expiry(&expires_at).into_bytes()).await {
            Ok(()) => {
                tracing::debug!(entries = snapshot.len(), expires_at = %expires_at, "Saved roster cache");
            }
            // The payload stays; without a marker the next read counts as expired.
            Err(e) => {
                tracing::error!(path = %marker.display(), error = %e, "Failed to write cache expiry marker");
            }
        }

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut first_error = None;

        for path in [self.payload_path(), self.expiry_path()] {
            if let Err(e) = remove_if_exists(&path).await {
                tracing::warn!(path = %path.display(), error = %e, "Failed to delete cache file");
                first_error.get_or_insert(CacheError::Io(format!("{}: {}", path.display(), e)));
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
