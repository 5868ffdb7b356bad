use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Coarse health classification. Variants are ordered from most to least
/// recommended, so `max` yields the stricter of two categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum FoodCategory {
    Advisable,
    Acceptable,
    Avoidable,
}

impl FoodCategory {
    pub fn stricter(self, other: FoodCategory) -> FoodCategory {
        self.max(other)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fiber: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub sugar: f64,
    /// Milligrams per serving.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub sodium: f64,
}

/// Nutrition amounts that are missing, null, negative, non-numeric or not
/// finite read as zero. Numeric strings are accepted.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let amount = match value {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(amount
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .unwrap_or(0.0))
}

/// A food item's nutrition and health snapshot, before or after
/// personalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanRecord {
    pub name: String,
    pub category: FoodCategory,
    /// 0..=100
    pub health_score: u8,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub calories: f64,
    #[serde(default)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub alerts: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

/// A scan record after profile adjustment, with its display band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdjustedScan {
    pub record: ScanRecord,
    pub score_band: ScoreBand,
}

impl From<ScanRecord> for AdjustedScan {
    fn from(record: ScanRecord) -> Self {
        Self {
            score_band: ScoreBand::from_score(record.health_score),
            record,
        }
    }
}
