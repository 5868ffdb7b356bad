use super::handlers::get_workout::{__path_get_workout, get_workout};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_workout))]
pub struct WorkoutApiDoc;

pub fn workout_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/sessions/{{session_id}}/workout",
            state.args.server.root_path
        ),
        get(get_workout),
    )
}
