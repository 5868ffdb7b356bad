use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    chat::{entities::ChatMessage, ports::ChatRepository},
    common::{SessionConfig, entities::app_errors::CoreError},
    profile::{entities::Profile, ports::ProfileRepository, value_objects::ProfileUpdate},
};

#[derive(Debug, Clone)]
struct SessionState {
    profile: Profile,
    chat: Vec<ChatMessage>,
    last_write: u64,
}

impl SessionState {
    fn start() -> Self {
        Self {
            profile: Profile::default(),
            chat: vec![ChatMessage::greeting()],
            last_write: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Sessions {
    states: HashMap<Uuid, SessionState>,
    clock: u64,
}

impl Sessions {
    /// Session to write to, started on first write. At capacity the least
    /// recently written session is evicted first.
    fn write_entry(&mut self, session_id: Uuid, max_sessions: usize) -> &mut SessionState {
        self.clock += 1;

        if !self.states.contains_key(&session_id) && self.states.len() >= max_sessions {
            let oldest = self
                .states
                .iter()
                .min_by_key(|(_, state)| state.last_write)
                .map(|(id, _)| *id);

            if let Some(oldest) = oldest {
                self.states.remove(&oldest);
                debug!(session_id = %oldest, "session evicted");
            }
        }

        let clock = self.clock;
        let state = self.states.entry(session_id).or_insert_with(|| {
            debug!(%session_id, "session started");
            SessionState::start()
        });
        state.last_write = clock;
        state
    }
}

/// Session state kept in process memory. Nothing outlives the process.
///
/// Reads never create a session: an unknown id reads as the default profile
/// and the greeting. Every mutation takes the write lock, so concurrent
/// updates to one session are applied one at a time. The store holds at most
/// `max_sessions` sessions and `max_chat_messages` messages per session.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<Sessions>>,
    limits: SessionConfig,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl InMemorySessionStore {
    pub fn new(limits: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Sessions::default())),
            limits: SessionConfig {
                max_sessions: limits.max_sessions.max(1),
                max_chat_messages: limits.max_chat_messages.max(2),
            },
        }
    }

    #[cfg(test)]
    async fn session_count(&self) -> usize {
        self.sessions.read().await.states.len()
    }
}

impl ProfileRepository for InMemorySessionStore {
    async fn find(&self, session_id: Uuid) -> Result<Profile, CoreError> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .states
            .get(&session_id)
            .map(|state| state.profile.clone())
            .unwrap_or_default())
    }

    async fn update(&self, session_id: Uuid, update: ProfileUpdate) -> Result<Profile, CoreError> {
        let mut sessions = self.sessions.write().await;
        let state = sessions.write_entry(session_id, self.limits.max_sessions);
        state.profile = state.profile.merge(update);

        Ok(state.profile.clone())
    }
}

impl ChatRepository for InMemorySessionStore {
    async fn get_history(&self, session_id: Uuid) -> Result<Vec<ChatMessage>, CoreError> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .states
            .get(&session_id)
            .map(|state| state.chat.clone())
            .unwrap_or_else(|| vec![ChatMessage::greeting()]))
    }

    async fn append(
        &self,
        session_id: Uuid,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatMessage>, CoreError> {
        let max_chat_messages = self.limits.max_chat_messages;
        let mut sessions = self.sessions.write().await;
        let state = sessions.write_entry(session_id, self.limits.max_sessions);
        state.chat.extend(messages);

        if state.chat.len() > max_chat_messages {
            let excess = state.chat.len() - max_chat_messages;
            state.chat.drain(..excess);
        }

        Ok(state.chat.clone())
    }
}
