use axum::extract::State;
use nutrisense_core::domain::chat::{entities::ChatMessage, ports::ChatService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    chat::validators::SendChatMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson, ValidatePath},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SendChatMessageResponse {
    /// The user's message followed by the assistant's reply.
    pub data: Vec<ChatMessage>,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Send a chat message",
    responses(
        (status = 201, body = SendChatMessageResponse),
        (status = 400, description = "Bad request")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = SendChatMessageValidator
)]
pub async fn send_chat_message(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendChatMessageValidator>,
) -> Result<Response<SendChatMessageResponse>, ApiError> {
    let messages = state
        .service
        .send_chat_message(session_id, payload.message)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SendChatMessageResponse { data: messages }))
}
