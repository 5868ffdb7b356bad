use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    chat::{
        entities::{ChatMessage, ChatRole},
        ports::{ChatRepository, ChatResponder, ChatService},
    },
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::ProfileRepository,
    scan::ports::ScanSource,
};

impl<P, CH, SC, AR> ChatService for Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    async fn get_chat_history(&self, session_id: Uuid) -> Result<Vec<ChatMessage>, CoreError> {
        self.chat_repository.get_history(session_id).await
    }

    async fn send_chat_message(
        &self,
        session_id: Uuid,
        content: String,
    ) -> Result<Vec<ChatMessage>, CoreError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(CoreError::InvalidInput("message must not be blank".to_string()));
        }

        let reply = self.chat_responder.reply(&content)?;
        let exchange = vec![
            ChatMessage::new(ChatRole::User, content),
            ChatMessage::new(ChatRole::Bot, reply),
        ];

        self.chat_repository
            .append(session_id, exchange.clone())
            .await?;

        debug!(%session_id, "chat reply sent");

        Ok(exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::ports::{MockChatRepository, MockChatResponder},
        profile::ports::MockProfileRepository,
        recommendation::entities::MealCatalog,
        scan::ports::MockScanSource,
    };

    fn service(
        chat_repository: MockChatRepository,
        chat_responder: MockChatResponder,
    ) -> Service<MockProfileRepository, MockChatRepository, MockScanSource, MockChatResponder>
    {
        Service::new(
            MockProfileRepository::new(),
            chat_repository,
            MockScanSource::new(),
            chat_responder,
            MealCatalog::default(),
        )
    }

    #[tokio::test]
    async fn test_send_chat_message_records_exchange() {
        let mut responder = MockChatResponder::new();
        responder
            .expect_reply()
            .withf(|message| message.to_string() == "What should I eat?")
            .times(1)
            .returning(|_| Ok("Try lentils.".to_string()));

        let mut repository = MockChatRepository::new();
        repository
            .expect_append()
            .withf(|_, messages| messages.len() == 2)
            .times(1)
            .returning(|_, messages| Box::pin(async move { Ok(messages) }));

        let exchange = service(repository, responder)
            .send_chat_message(Uuid::new_v4(), "  What should I eat?  ".to_string())
            .await
            .unwrap();

        assert_eq!(exchange[0].role, ChatRole::User);
        assert_eq!(exchange[0].content, "What should I eat?");
        assert_eq!(exchange[1].role, ChatRole::Bot);
        assert_eq!(exchange[1].content, "Try lentils.");
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let result = service(MockChatRepository::new(), MockChatResponder::new())
            .send_chat_message(Uuid::new_v4(), " \n ".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
