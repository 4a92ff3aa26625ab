//! Expiring in-memory map from session id to message history.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use toollm_common::SessionId;

use crate::Message;

/// Default lifetime of a conversation after its last write.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60 * 24);

struct Entry {
    messages: Vec<Message>,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Cloneable handle to the shared session store.
///
/// Reads hand out a copy of the history and writes replace it whole, so two
/// overlapping requests on one session keep only the last writer's turn.
#[derive(Clone)]
pub struct SessionCache {
    entries: Arc<RwLock<HashMap<SessionId, Entry>>>,
    ttl: Duration,
}

impl SessionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// History for `id`, or `None` if absent or expired.
    pub async fn get(&self, id: &SessionId) -> Option<Vec<Message>> {
        let now = Instant::now();
        {
            let map = self.entries.read().await;
            match map.get(id) {
                Some(entry) if !entry.is_expired(now) => return Some(entry.messages.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut map = self.entries.write().await;
        if map.get(id).is_some_and(|entry| entry.is_expired(now)) {
            map.remove(id);
            tracing::debug!(session = %id, "Dropped expired session on read");
        }
        None
    }

    /// Store `messages` as the history of `id`, restarting its TTL.
    pub async fn set(&self, id: SessionId, messages: Vec<Message>) {
        let entry = Entry {
            messages,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(id, entry);
    }

    /// Remove a session. Returns true if it existed.
    pub async fn remove(&self, id: &SessionId) -> bool {
        self.entries.write().await.remove(id).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn reap_expired(&self) -> usize {
        let now = Instant::now();
        let mut map = self.entries.write().await;
        let before = map.len();
        map.retain(|id, entry| {
            let expired = entry.is_expired(now);
            if expired {
                tracing::info!(session = %id, "Reaping expired session");
            }
            !expired
        });
        before - map.len()
    }

    /// Number of stored sessions, including expired ones not yet reaped.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
