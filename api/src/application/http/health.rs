use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LiveResponse {
    pub status: String,
}

pub async fn live() -> Json<LiveResponse> {
    Json(LiveResponse {
        status: "ok".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health/live"), get(live))
}
