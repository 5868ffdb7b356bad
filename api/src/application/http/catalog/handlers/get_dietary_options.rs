use nutrisense_core::domain::profile::value_objects::{DietaryOption, dietary_options};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietaryOptionsResponse {
    pub data: Vec<DietaryOption>,
}

#[utoipa::path(
    get,
    path = "/dietary-options",
    tag = "catalog",
    summary = "List dietary preference options",
    responses(
        (status = 200, body = GetDietaryOptionsResponse)
    )
)]
pub async fn get_dietary_options() -> Result<Response<GetDietaryOptionsResponse>, ApiError> {
    Ok(Response::OK(GetDietaryOptionsResponse {
        data: dietary_options(),
    }))
}
