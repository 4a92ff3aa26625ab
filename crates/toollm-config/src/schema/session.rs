use serde::{Deserialize, Serialize};

/// In-memory conversation cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds a conversation survives after its last write.
    pub ttl_secs: u64,
    /// Seconds between sweeps of expired conversations.
    pub reap_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 60 * 60 * 24,
            reap_interval_secs: 600,
        }
    }
}
