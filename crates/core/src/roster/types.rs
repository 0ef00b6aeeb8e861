use std::fmt;

use serde::{Deserialize, Serialize};

/// A single member name as it appears in the roster spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterEntry(String);

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RosterEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RosterEntry {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An ordered roster as fetched from the remote source.
///
/// Row order is preserved and duplicates are kept. Serializes as a plain
/// JSON array of strings, which is also the on-disk cache payload format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterSnapshot {
    pub entries: Vec<RosterEntry>,
}

impl RosterSnapshot {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Member names as plain strings, in row order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.as_str().to_string()).collect()
    }
}

impl<S: Into<RosterEntry>> FromIterator<S> for RosterSnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Why a roster lookup resolved to no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The expiry marker was valid but the payload could not be read.
    CacheUnreadable,
    /// Authorization failed and there was no cached payload to fall back on.
    NoFallback,
    /// The remote range was read successfully and contained no names.
    RemoteEmpty,
    /// The remote read failed.
    RemoteFailed,
}

/// Result of a single roster lookup.
///
/// Every path through the lookup resolves to one of these variants; none of
/// them is an error from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterOutcome {
    /// Freshly fetched from the remote source and written to the cache.
    Fresh(RosterSnapshot),
    /// Served from a cache that has not yet expired.
    Cached(RosterSnapshot),
    /// Refresh was required but authorization failed; served from the
    /// expired cache.
    StaleFallback(RosterSnapshot),
    Empty(EmptyReason),
}

impl RosterOutcome {
    /// Whether the entries came from the local cache rather than the remote.
    ///
    /// Empty results caused by cache or authorization trouble count as
    /// cache-served; empty results from the remote itself do not.
    pub fn served_from_cache(&self) -> bool {
        match self {
            RosterOutcome::Fresh(_) => false,
            RosterOutcome::Cached(_) | RosterOutcome::StaleFallback(_) => true,
            RosterOutcome::Empty(EmptyReason::CacheUnreadable | EmptyReason::NoFallback) => true,
            RosterOutcome::Empty(EmptyReason::RemoteEmpty | EmptyReason::RemoteFailed) => false,
        }
    }

    pub fn into_response(self) -> RosterResponse {
        let served_from_cache = self.served_from_cache();
        let entries = match self {
            RosterOutcome::Fresh(s) | RosterOutcome::Cached(s) | RosterOutcome::StaleFallback(s) => {
                s.names()
            }
            RosterOutcome::Empty(_) => Vec::new(),
        };
        RosterResponse {
            entries,
            served_from_cache,
        }
    }
}

/// The route-facing shape of a roster lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterResponse {
    pub entries: Vec<String>,
    pub served_from_cache: bool,
}
