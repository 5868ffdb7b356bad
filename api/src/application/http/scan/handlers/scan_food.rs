use axum::extract::State;
use nutrisense_core::domain::scan::{entities::AdjustedScan, ports::ScanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    scan::validators::ScanFoodValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson, ValidatePath},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanFoodResponse {
    pub data: AdjustedScan,
}

#[utoipa::path(
    post,
    path = "/scans",
    tag = "scan",
    summary = "Scan a food item",
    description = "Looks up a canned fixture or a barcode in the mock scanner and personalizes the result for the session's profile.",
    responses(
        (status = 201, body = ScanFoodResponse),
        (status = 400, description = "Bad request")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = ScanFoodValidator
)]
pub async fn scan_food(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanFoodValidator>,
) -> Result<Response<ScanFoodResponse>, ApiError> {
    let query = payload.into_query()?;

    let scan = state
        .service
        .scan_food(session_id, query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ScanFoodResponse { data: scan }))
}
