use axum::extract::State;
use nutrisense_core::domain::scan::{entities::AdjustedScan, ports::ScanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    scan::validators::AdjustScanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson, ValidatePath},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdjustScanResponse {
    pub data: AdjustedScan,
}

#[utoipa::path(
    post,
    path = "/scans/adjust",
    tag = "scan",
    summary = "Personalize a scan record",
    description = "Applies the session's profile checks to a raw record. Send records straight from a scanner; an already adjusted record would be penalized again.",
    responses(
        (status = 200, body = AdjustScanResponse),
        (status = 400, description = "Bad request")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = AdjustScanValidator
)]
pub async fn adjust_scan(
    ValidatePath(session_id): ValidatePath<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AdjustScanValidator>,
) -> Result<Response<AdjustScanResponse>, ApiError> {
    let scan = state
        .service
        .adjust_scan(session_id, payload.record)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AdjustScanResponse { data: scan }))
}
