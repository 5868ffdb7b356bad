use axum::extract::State;
use nutrisense_core::domain::workout::{entities::WorkoutPlan, ports::WorkoutService};
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
pub struct GetWorkoutResponse {
    pub data: WorkoutPlan,
}

#[utoipa::path(
    get,
    path = "/workout",
    tag = "workout",
    summary = "Get workout plan",
    description = "Low-impact plan when the profile lists hypertension, cardio and strength otherwise.",
    responses(
        (status = 200, body = GetWorkoutResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    )
)]
pub async fn get_workout(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetWorkoutResponse>, ApiError> {
    let plan = state
        .service
        .get_workout(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWorkoutResponse { data: plan }))
}
