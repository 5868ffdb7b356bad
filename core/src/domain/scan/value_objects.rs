use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Canned items the mock scanner can be asked for directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanFixture {
    Healthy,
    Unhealthy,
}

impl FromStr for ScanFixture {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "healthy" => Ok(ScanFixture::Healthy),
            "unhealthy" => Ok(ScanFixture::Unhealthy),
            _ => Err(CoreError::UnknownScanFixture(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanQuery {
    Fixture(ScanFixture),
    Barcode(String),
}
