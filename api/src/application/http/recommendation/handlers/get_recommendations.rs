use axum::extract::State;
use nutrisense_core::domain::recommendation::{
    entities::PersonalizedContent, ports::RecommendationService,
};
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
pub struct GetRecommendationsResponse {
    pub data: PersonalizedContent,
}

#[utoipa::path(
    get,
    path = "/recommendations",
    tag = "recommendation",
    summary = "Get personalized content",
    description = "Meal plan filtered by the session's dietary preferences and allergies, plus health tips and weekly insights.",
    responses(
        (status = 200, body = GetRecommendationsResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    )
)]
pub async fn get_recommendations(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    let content = state
        .service
        .get_recommendations(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecommendationsResponse { data: content }))
}
