use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::value_objects::{ProfileUpdate, TagSet};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Self-reported dietary and medical attributes of one session's user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub language: String,
    pub dietary_preferences: TagSet,
    pub medical_conditions: TagSet,
    pub medications: TagSet,
    pub allergies: TagSet,
}

/// The profile a new session starts with.
impl Default for Profile {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            dietary_preferences: TagSet::default(),
            medical_conditions: TagSet::from(["Hypertension"]),
            medications: TagSet::from(["Lisinopril"]),
            allergies: TagSet::from(["Nuts", "Dairy"]),
        }
    }
}

impl Profile {
    /// A profile with no restrictions at all.
    pub fn unrestricted() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            dietary_preferences: TagSet::default(),
            medical_conditions: TagSet::default(),
            medications: TagSet::default(),
            allergies: TagSet::default(),
        }
    }

    pub fn has_dietary_preference(&self, preference: &str) -> bool {
        self.dietary_preferences.contains(preference)
    }

    pub fn has_condition(&self, condition: &str) -> bool {
        self.medical_conditions.contains(condition)
    }

    pub fn has_allergy(&self, allergy: &str) -> bool {
        self.allergies.contains(allergy)
    }

    /// Shallow merge: every field present in `update` replaces ours. A blank
    /// language keeps the current one.
    pub fn merge(&self, update: ProfileUpdate) -> Self {
        Self {
            language: update
                .language
                .map(|language| language.trim().to_string())
                .filter(|language| !language.is_empty())
                .unwrap_or_else(|| self.language.clone()),
            dietary_preferences: update
                .dietary_preferences
                .unwrap_or_else(|| self.dietary_preferences.clone()),
            medical_conditions: update
                .medical_conditions
                .unwrap_or_else(|| self.medical_conditions.clone()),
            medications: update
                .medications
                .unwrap_or_else(|| self.medications.clone()),
            allergies: update.allergies.unwrap_or_else(|| self.allergies.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.language, "en");
        assert!(profile.dietary_preferences.is_empty());
        assert!(profile.has_condition("hypertension"));
        assert!(profile.has_allergy("Nuts"));
        assert!(profile.has_allergy("dairy"));
    }

    #[test]
    fn test_merge_replaces_only_provided_fields() {
        let profile = Profile::default();
        let merged = profile.merge(ProfileUpdate {
            allergies: Some(TagSet::parse_delimited("Shellfish, Wheat")),
            ..Default::default()
        });

        assert_eq!(merged.allergies, TagSet::from(["Shellfish", "Wheat"]));
        assert!(!merged.has_allergy("Nuts"));
        assert_eq!(merged.medical_conditions, profile.medical_conditions);
        assert_eq!(merged.medications, profile.medications);
        assert_eq!(merged.language, profile.language);
    }

    #[test]
    fn test_merge_with_empty_set_clears_field() {
        let merged = Profile::default().merge(ProfileUpdate {
            medical_conditions: Some(TagSet::default()),
            ..Default::default()
        });
        assert!(merged.medical_conditions.is_empty());
    }

    #[test]
    fn test_merge_ignores_blank_language() {
        let profile = Profile::default();
        let merged = profile.merge(ProfileUpdate {
            language: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.language, "en");

        let merged = profile.merge(ProfileUpdate {
            language: Some(" es ".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.language, "es");
    }

    #[test]
    fn test_empty_update_is_identity() {
        let profile = Profile::default();
        assert_eq!(profile.merge(ProfileUpdate::default()), profile);
    }
}
