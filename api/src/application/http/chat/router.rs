use super::handlers::{
    get_chat_history::{__path_get_chat_history, get_chat_history},
    send_chat_message::{__path_send_chat_message, send_chat_message},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_chat_history, send_chat_message))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/sessions/{{session_id}}/chat", state.args.server.root_path),
        get(get_chat_history).post(send_chat_message),
    )
}
