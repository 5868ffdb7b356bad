use nutrisense_core::domain::profile::value_objects::{ProfileUpdate, TagSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Tags as a JSON list or as the raw comma-delimited text of a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Delimited(String),
}

impl From<TagsInput> for TagSet {
    fn from(input: TagsInput) -> Self {
        match input {
            TagsInput::List(tags) => TagSet::new(tags),
            TagsInput::Delimited(raw) => TagSet::parse_delimited(&raw),
        }
    }
}

fn validate_language(language: &str) -> Result<(), ValidationError> {
    let length = language.trim().chars().count();
    if !(1..=16).contains(&length) {
        return Err(ValidationError::new("language")
            .with_message("language must be between 1 and 16 characters".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(custom(function = "validate_language"))]
    pub language: Option<String>,

    #[serde(default)]
    pub dietary_preferences: Option<TagsInput>,

    #[serde(default)]
    pub medical_conditions: Option<TagsInput>,

    #[serde(default)]
    pub medications: Option<TagsInput>,

    #[serde(default)]
    pub allergies: Option<TagsInput>,
}

impl From<UpdateProfileValidator> for ProfileUpdate {
    fn from(payload: UpdateProfileValidator) -> Self {
        ProfileUpdate {
            language: payload.language,
            dietary_preferences: payload.dietary_preferences.map(TagSet::from),
            medical_conditions: payload.medical_conditions.map(TagSet::from),
            medications: payload.medications.map(TagSet::from),
            allergies: payload.allergies.map(TagSet::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lists_and_raw_strings() {
        let payload: UpdateProfileValidator = serde_json::from_str(
            r#"{"allergies": "Nuts, Shellfish ,", "dietary_preferences": ["vegan"]}"#,
        )
        .unwrap();
        let update = ProfileUpdate::from(payload);

        assert_eq!(update.allergies, Some(TagSet::from(["Nuts", "Shellfish"])));
        assert_eq!(update.dietary_preferences, Some(TagSet::from(["vegan"])));
        assert_eq!(update.medical_conditions, None);
        assert_eq!(update.language, None);
    }

    #[test]
    fn test_rejects_empty_language() {
        let payload: UpdateProfileValidator = serde_json::from_str(r#"{"language": ""}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_rejects_whitespace_language() {
        let payload: UpdateProfileValidator =
            serde_json::from_str(r#"{"language": "   "}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: UpdateProfileValidator =
            serde_json::from_str(r#"{"language": " fr "}"#).unwrap();
        assert!(payload.validate().is_ok());
    }
}
