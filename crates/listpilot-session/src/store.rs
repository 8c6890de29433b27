//! Keyed session store with optional idle expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::record::{ConnectedAccount, SessionRecord};

#[derive(Debug)]
struct Entry {
    record: SessionRecord,
    last_access: Instant,
}

/// Concurrency-safe mapping from session identifier to connected-account
/// record.
///
/// Contract:
/// - `put` unconditionally overwrites any prior record for the identifier.
/// - `get` is a pure lookup; absence is the normal "unconnected" state.
/// - `remove` is idempotent; removing an unknown identifier is a no-op.
///
/// When an idle TTL is configured, an entry that has not been touched within
/// the TTL is removed on access and becomes indistinguishable from one that
/// never existed. The default is no expiry.
#[derive(Debug)]
pub struct SessionStore {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Option<Duration>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store whose sessions never expire.
    pub fn new() -> Self {
        Self::with_ttl(None)
    }

    /// Create a store with an optional idle TTL.
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a record for the identifier, replacing any prior record.
    pub async fn put(&self, session_id: &str, access_token: String, account: ConnectedAccount) {
        let record = SessionRecord {
            session_id: session_id.to_string(),
            access_token,
            account,
            connected_at: Utc::now(),
        };

        let mut entries = self.entries.write().await;
        entries.insert(
            session_id.to_string(),
            Entry {
                record,
                last_access: Instant::now(),
            },
        );
    }

    /// Look up a record, refreshing its idle timer.
    ///
    /// Returns `None` for unknown identifiers and for idle-expired entries,
    /// which are removed on the way out.
    pub async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        let mut entries = self.entries.write().await;

        let expired = match (self.ttl, entries.get(session_id)) {
            (Some(ttl), Some(entry)) => entry.last_access.elapsed() > ttl,
            _ => false,
        };

        if expired {
            entries.remove(session_id);
            debug!(session_id, "session expired after idle TTL");
            return None;
        }

        entries.get_mut(session_id).map(|entry| {
            entry.last_access = Instant::now();
            entry.record.clone()
        })
    }

    /// Remove a record. Returns whether it existed; removing an unknown
    /// identifier is not a failure.
    pub async fn remove(&self, session_id: &str) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(session_id).is_some()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
