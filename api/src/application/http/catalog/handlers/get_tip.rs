use nutrisense_core::domain::tip::{DailyTip, tip_of_the_day};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateQuery},
    response::Response,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetTipParams {
    /// Position in the tip rotation. Wraps around; defaults to 0.
    pub index: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTipResponse {
    pub data: DailyTip,
}

#[utoipa::path(
    get,
    path = "/tips",
    tag = "catalog",
    summary = "Get a daily tip",
    params(GetTipParams),
    responses(
        (status = 200, body = GetTipResponse)
    )
)]
pub async fn get_tip(
    ValidateQuery(params): ValidateQuery<GetTipParams>,
) -> Result<Response<GetTipResponse>, ApiError> {
    let tip = tip_of_the_day(params.index.unwrap_or_default());

    Ok(Response::OK(GetTipResponse { data: tip }))
}
