use axum::extract::State;
use nutrisense_core::domain::chat::{entities::ChatMessage, ports::ChatService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidatePath},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetChatHistoryResponse {
    pub data: Vec<ChatMessage>,
}

#[utoipa::path(
    get,
    path = "/chat",
    tag = "chat",
    summary = "Get chat history",
    description = "Conversation with the assistant, oldest first. New sessions start with a greeting.",
    responses(
        (status = 200, body = GetChatHistoryResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    )
)]
pub async fn get_chat_history(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetChatHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_chat_history(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetChatHistoryResponse { data: history }))
}
