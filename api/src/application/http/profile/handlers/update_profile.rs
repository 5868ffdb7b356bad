use axum::extract::State;
use nutrisense_core::domain::profile::{
    entities::Profile, ports::ProfileService, value_objects::ProfileUpdate,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    profile::validators::UpdateProfileValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson, ValidatePath},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    patch,
    path = "/profile",
    tag = "profile",
    summary = "Update session profile",
    description = "Shallow merge: each provided field replaces the stored one, omitted fields are kept. Tag fields accept a list or a comma-delimited string.",
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Bad request")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(session_id, ProfileUpdate::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
