use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct NutrisenseConfig {
    pub randomness: RandomnessConfig,
    pub sessions: SessionConfig,
}

/// Bounds on the in-memory session store.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Sessions kept before the least recently written one is evicted.
    pub max_sessions: usize,
    /// Chat messages kept per session; older ones are dropped first.
    pub max_chat_messages: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            max_chat_messages: 200,
        }
    }
}

/// Seed for the random sources behind the mock scanner and the chat
/// assistant. `None` seeds from OS entropy.
#[derive(Clone, Debug, Default)]
pub struct RandomnessConfig {
    pub seed: Option<u64>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Case-insensitive substring containment, used by every food/tag rule.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
