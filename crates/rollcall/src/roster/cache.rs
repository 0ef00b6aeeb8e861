//! Roster lookups through the local cache, refreshing from the spreadsheet
//! once the cache has expired.
//!
//! All state lives in the [`CacheStore`]; nothing is kept in memory between
//! calls. Every failure resolves to a [`RosterOutcome`] and is logged here.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rollcall_core::auth::TokenStore;
use rollcall_core::cache::CacheStore;
use rollcall_core::clock::Clock;
use rollcall_core::roster::{is_expired, EmptyReason, RosterOutcome, RosterSnapshot};
use rollcall_core::source::{RosterSource, SheetRange};

pub struct RosterCache {
    cache: Arc<dyn CacheStore>,
    tokens: Arc<dyn TokenStore>,
    source: Arc<dyn RosterSource>,
    clock: Arc<dyn Clock>,
    range: SheetRange,
}

impl RosterCache {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        tokens: Arc<dyn TokenStore>,
        source: Arc<dyn RosterSource>,
        clock: Arc<dyn Clock>,
        range: SheetRange,
    ) -> Self {
        Self {
            cache,
            tokens,
            source,
            clock,
            range,
        }
    }

    /// Returns the roster, from the cache while it is valid and from the
    /// spreadsheet otherwise.
    ///
    /// Concurrent calls during an expired window each refresh on their own;
    /// the last cache write wins.
    pub async fn get_roster(&self) -> RosterOutcome {
        match self.cache.load_expiry().await {
            Some(expires_at) if !is_expired(self.clock.now(), expires_at) => {
                return self.serve_cached().await;
            }
            Some(expires_at) => {
                tracing::debug!(expires_at = %expires_at, "Roster cache expired");
            }
            None => {
                tracing::debug!("Roster cache has no expiry, treating as expired");
            }
        }

        self.refresh().await
    }

    /// Deletes the cached roster so the next lookup refreshes. Failures are
    /// logged only.
    pub async fn clear_cache(&self) {
        match self.cache.clear().await {
            Ok(()) => tracing::info!("Roster cache cleared"),
            Err(e) => tracing::warn!(error = %e, "Failed to clear roster cache"),
        }
    }

    /// Current cache deadline, if any.
    pub async fn cache_expires_at(&self) -> Option<DateTime<Utc>> {
        self.cache.load_expiry().await
    }

    async fn serve_cached(&self) -> RosterOutcome {
        match self.cache.load().await {
            Ok(snapshot) => RosterOutcome::Cached(snapshot),
            // Only expiry triggers a refresh; a missing payload degrades to empty.
            Err(e) => {
                tracing::warn!(error = %e, "Roster cache marker is valid but payload is unreadable");
                RosterOutcome::Empty(EmptyReason::CacheUnreadable)
            }
        }
    }

    async fn refresh(&self) -> RosterOutcome {
        let credential = match self.tokens.authorize().await {
            Ok(credential) => credential,
            Err(e) => {
                tracing::warn!(error = %e, "Authorization failed, serving stale roster");
                return self.stale_fallback().await;
            }
        };

        match self.source.try_fetch(&credential, &self.range).await {
            Ok(entries) if entries.is_empty() => {
                tracing::warn!(
                    spreadsheet_id = %self.range.spreadsheet_id,
                    range = %self.range.range,
                    "Spreadsheet returned no names, keeping existing cache"
                );
                RosterOutcome::Empty(EmptyReason::RemoteEmpty)
            }
            Ok(entries) => {
                let snapshot = RosterSnapshot::new(entries);
                if let Err(e) = self.cache.save(&snapshot).await {
                    tracing::error!(error = %e, "Failed to write roster cache");
                }
                tracing::info!(entries = snapshot.len(), "Refreshed roster from spreadsheet");
                RosterOutcome::Fresh(snapshot)
            }
            Err(e) => {
                tracing::error!(
                    spreadsheet_id = %self.range.spreadsheet_id,
                    range = %self.range.range,
                    error = %e,
                    "Failed to retrieve roster, keeping existing cache"
                );
                RosterOutcome::Empty(EmptyReason::RemoteFailed)
            }
        }
    }

    async fn stale_fallback(&self) -> RosterOutcome {
        match self.cache.load().await {
            Ok(snapshot) => RosterOutcome::StaleFallback(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "No cached roster to fall back on");
                RosterOutcome::Empty(EmptyReason::NoFallback)
            }
        }
    }
}
