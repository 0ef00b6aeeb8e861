use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::roster::RosterSnapshot;

use super::Result;

/// Durable storage for one roster snapshot and its expiry deadline.
///
/// The snapshot and the deadline may be stored separately. Implementations
/// must tolerate either half being absent: a missing deadline reads as
/// `None`, a missing payload as [`CacheError::Miss`](super::CacheError::Miss).
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads the expiry deadline. `None` when missing or unreadable.
    async fn load_expiry(&self) -> Option<DateTime<Utc>>;

    /// Reads the snapshot payload.
    async fn load(&self) -> Result<RosterSnapshot>;

    /// Writes the snapshot, then a deadline of `now + ttl`.
    ///
    /// Fails only if the snapshot itself could not be written. A failed
    /// deadline write is logged and leaves the cache reading as expired.
    async fn save(&self, snapshot: &RosterSnapshot) -> Result<()>;

    /// Deletes both the snapshot and the deadline, tolerating either being
    /// already absent.
    async fn clear(&self) -> Result<()>;
}
