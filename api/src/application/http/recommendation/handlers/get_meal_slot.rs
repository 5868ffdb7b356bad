use axum::extract::State;
use nutrisense_core::domain::recommendation::{
    entities::MealSlotPlan, ports::RecommendationService,
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
pub struct GetMealSlotResponse {
    pub data: MealSlotPlan,
}

#[utoipa::path(
    get,
    path = "/recommendations/meals/{slot}",
    tag = "recommendation",
    summary = "Get one meal slot",
    responses(
        (status = 200, body = GetMealSlotResponse),
        (status = 404, description = "Unknown meal slot")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("slot" = String, Path, description = "breakfast, lunch, dinner or snacks"),
    )
)]
pub async fn get_meal_slot(
    ValidatePath((session_id, slot)): ValidatePath<(Uuid, String)>,
    State(state): State<AppState>,
) -> Result<Response<GetMealSlotResponse>, ApiError> {
    let plan = state
        .service
        .get_meal_slot(session_id, &slot)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealSlotResponse { data: plan }))
}
