use axum::extract::State;
use nutrisense_core::domain::profile::{entities::Profile, ports::ProfileService};
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
pub struct GetProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Get session profile",
    description = "Returns the session's dietary and medical profile. An unknown session reads as the default profile.",
    responses(
        (status = 200, body = GetProfileResponse)
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    )
)]
pub async fn get_profile(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
