use nutrisense_core::domain::scan::{
    entities::ScanRecord,
    value_objects::{ScanFixture, ScanQuery},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScanFoodValidator {
    /// `healthy` or `unhealthy`.
    #[serde(default)]
    #[schema(example = "healthy")]
    pub fixture: Option<String>,

    #[serde(default)]
    #[validate(length(max = 64, message = "barcode must be at most 64 characters"))]
    pub barcode: Option<String>,
}

impl ScanFoodValidator {
    /// Exactly one of `fixture` and `barcode` must be given.
    pub fn into_query(self) -> Result<ScanQuery, ApiError> {
        match (self.fixture, self.barcode) {
            (Some(fixture), None) => fixture
                .parse::<ScanFixture>()
                .map(ScanQuery::Fixture)
                .map_err(ApiError::from),
            (None, Some(barcode)) => Ok(ScanQuery::Barcode(barcode)),
            (Some(_), Some(_)) => Err(ApiError::ValidationError(
                "provide either fixture or barcode, not both".to_string(),
            )),
            (None, None) => Err(ApiError::ValidationError(
                "fixture or barcode is required".to_string(),
            )),
        }
    }
}

fn validate_scan_record(record: &ScanRecord) -> Result<(), ValidationError> {
    if record.name.trim().is_empty() {
        return Err(ValidationError::new("name").with_message("name is required".into()));
    }
    if record.health_score > 100 {
        return Err(ValidationError::new("health_score")
            .with_message("health_score must be between 0 and 100".into()));
    }
    Ok(())
}

/// A raw scan record to personalize against the session profile.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AdjustScanValidator {
    #[serde(flatten)]
    #[validate(custom(function = "validate_scan_record"))]
    pub record: ScanRecord,
}
