use super::handlers::{
    adjust_scan::{__path_adjust_scan, adjust_scan},
    scan_food::{__path_scan_food, scan_food},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_food, adjust_scan))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/scans",
                state.args.server.root_path
            ),
            post(scan_food),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/scans/adjust",
                state.args.server.root_path
            ),
            post(adjust_scan),
        )
}
