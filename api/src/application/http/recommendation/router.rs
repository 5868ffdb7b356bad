use super::handlers::{
    get_meal_slot::{__path_get_meal_slot, get_meal_slot},
    get_recommendations::{__path_get_recommendations, get_recommendations},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recommendations, get_meal_slot))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recommendations",
                state.args.server.root_path
            ),
            get(get_recommendations),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recommendations/meals/{{slot}}",
                state.args.server.root_path
            ),
            get(get_meal_slot),
        )
}
