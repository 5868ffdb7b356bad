use std::future::Future;
use uuid::Uuid;

use crate::domain::{chat::entities::ChatMessage, common::entities::app_errors::CoreError};

/// Per-session conversation history.
#[cfg_attr(test, mockall::automock)]
pub trait ChatRepository: Send + Sync {
    /// Full history, oldest first. A new session starts with the greeting.
    fn get_history(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;

    fn append(
        &self,
        session_id: Uuid,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;
}

/// Produces the assistant's reply to a user message.
#[cfg_attr(test, mockall::automock)]
pub trait ChatResponder: Send + Sync {
    fn reply(&self, message: &str) -> Result<String, CoreError>;
}

pub trait ChatService: Send + Sync {
    fn get_chat_history(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;

    /// Records the user's message and the assistant's reply, returning the
    /// two new messages.
    fn send_chat_message(
        &self,
        session_id: Uuid,
        content: String,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;
}
