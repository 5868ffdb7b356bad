//! Personalizes a raw scan record against the session profile.
//!
//! The checks run in a fixed order, each one seeing the result of the ones
//! before it. A check can only add an alert, tighten the category and lower
//! the score, so adjustment is monotonic.
//!
//! Adjustment is meant to run once per raw record from the scan source.
//! Feeding an adjusted record back in applies the penalties again.

use crate::domain::{
    common::contains_ignore_case,
    profile::entities::Profile,
    scan::entities::{FoodCategory, ScanRecord},
};

pub const SODIUM_LIMIT_MG: f64 = 300.0;

pub const HYPERTENSION_SODIUM_ALERT: &str =
    "⚠️ High sodium - not recommended for hypertension management";
pub const ALLERGEN_ALERT: &str = "🚨 Contains allergens from your profile";

/// Effect of a check that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub alert: &'static str,
    /// Category the record is tightened to at least.
    pub category_floor: FoodCategory,
    pub score_penalty: u8,
}

pub type ScanCheck = fn(&ScanRecord, &Profile) -> Option<CheckOutcome>;

pub const SCAN_CHECKS: [ScanCheck; 2] = [hypertension_sodium, profile_allergens];

pub fn hypertension_sodium(record: &ScanRecord, profile: &Profile) -> Option<CheckOutcome> {
    (profile.has_condition("Hypertension") && record.nutrition.sodium > SODIUM_LIMIT_MG).then_some(
        CheckOutcome {
            alert: HYPERTENSION_SODIUM_ALERT,
            category_floor: FoodCategory::Acceptable,
            score_penalty: 20,
        },
    )
}

pub fn profile_allergens(record: &ScanRecord, profile: &Profile) -> Option<CheckOutcome> {
    let matched = profile.allergies.iter().any(|allergy| {
        record
            .ingredients
            .iter()
            .any(|ingredient| contains_ignore_case(ingredient, allergy))
    });

    matched.then_some(CheckOutcome {
        alert: ALLERGEN_ALERT,
        category_floor: FoodCategory::Avoidable,
        score_penalty: 30,
    })
}

/// Returns a new record personalized for `profile`; `record` is untouched.
pub fn adjust(record: &ScanRecord, profile: &Profile) -> ScanRecord {
    SCAN_CHECKS
        .iter()
        .fold(record.clone(), |mut current, check| {
            if let Some(outcome) = check(&current, profile) {
                current.alerts.push(outcome.alert.to_string());
                current.category = current.category.stricter(outcome.category_floor);
                current.health_score = current.health_score.saturating_sub(outcome.score_penalty);
            }
            current
        })
}
