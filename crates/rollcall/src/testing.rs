//! Hand-written doubles for the roster collaborators.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rollcall_core::auth::{AccessToken, AuthError, Credential, ServiceAccount, TokenStore};
use rollcall_core::cache::{CacheError, CacheStore};
use rollcall_core::clock::Clock;
use rollcall_core::roster::{RosterEntry, RosterSnapshot};
use rollcall_core::source::{RosterSource, SheetRange, TransportError};
use tokio::sync::RwLock;

pub fn names(names: &[&str]) -> RosterSnapshot {
    names.iter().copied().collect()
}

/// In-memory cache store that stamps expiry from a shared clock.
pub struct MockCacheStore {
    snapshot: RwLock<Option<RosterSnapshot>>,
    expires_at: RwLock<Option<DateTime<Utc>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    fail_saves: AtomicBool,
    fail_clears: AtomicBool,
    saves: AtomicUsize,
    clears: AtomicUsize,
}

impl MockCacheStore {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot: RwLock::new(None),
            expires_at: RwLock::new(None),
            ttl,
            clock,
            fail_saves: AtomicBool::new(false),
            fail_clears: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
            clears: AtomicUsize::new(0),
        }
    }

    pub async fn seed(&self, snapshot: RosterSnapshot, expires_at: Option<DateTime<Utc>>) {
        *self.snapshot.write().await = Some(snapshot);
        *self.expires_at.write().await = expires_at;
    }

    pub async fn seed_expiry(&self, expires_at: Option<DateTime<Utc>>) {
        *self.expires_at.write().await = expires_at;
    }

    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        *self.expires_at.read().await
    }

    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    pub fn fail_clears(&self) {
        self.fail_clears.store(true, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn load_expiry(&self) -> Option<DateTime<Utc>> {
        *self.expires_at.read().await
    }

    async fn load(&self) -> rollcall_core::cache::Result<RosterSnapshot> {
        self.snapshot
            .read()
            .await
            .clone()
            .ok_or_else(|| CacheError::Miss("no snapshot".to_string()))
    }

    async fn save(&self, snapshot: &RosterSnapshot) -> rollcall_core::cache::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(CacheError::Io("disk full".to_string()));
        }
        *self.snapshot.write().await = Some(snapshot.clone());
        *self.expires_at.write().await = Some(self.clock.now() + self.ttl);
        Ok(())
    }

    async fn clear(&self) -> rollcall_core::cache::Result<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        if self.fail_clears.load(Ordering::SeqCst) {
            return Err(CacheError::Io("permission denied".to_string()));
        }
        *self.snapshot.write().await = None;
        *self.expires_at.write().await = None;
        Ok(())
    }
}

pub struct MockTokenStore {
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockTokenStore {
    pub fn ok() -> Self {
        Self {
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn authorize(&self) -> rollcall_core::auth::Result<Credential> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AuthError::Exchange("invalid_grant".to_string()));
        }
        Ok(Credential::new(
            ServiceAccount::new("svc@example.com", "key"),
            AccessToken::new("token", None),
        ))
    }
}

pub struct MockRosterSource {
    response: RwLock<Result<Vec<RosterEntry>, TransportError>>,
    calls: AtomicUsize,
}

impl MockRosterSource {
    pub fn returning(entries: &[&str]) -> Self {
        Self {
            response: RwLock::new(Ok(entries.iter().map(|s| RosterEntry::from(*s)).collect())),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_response(&self, response: Result<Vec<RosterEntry>, TransportError>) {
        *self.response.write().await = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterSource for MockRosterSource {
    async fn try_fetch(
        &self,
        _credential: &Credential,
        _range: &SheetRange,
    ) -> Result<Vec<RosterEntry>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.read().await.clone()
    }
}
