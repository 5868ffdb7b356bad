use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordered set of free-form profile tags.
///
/// Tags are trimmed on entry, empty entries are dropped, and uniqueness is
/// case-insensitive: the first spelling seen is the one kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for tag in tags {
            set.insert(tag.as_ref());
        }
        set
    }

    /// Parse a comma-delimited raw string such as `"Nuts, Dairy,,"`.
    pub fn parse_delimited(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.0.iter().any(|existing| existing.to_lowercase() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

impl<const N: usize> From<[&str; N]> for TagSet {
    fn from(tags: [&str; N]) -> Self {
        Self::new(tags)
    }
}

/// Partial profile edit. Provided fields replace the stored value wholesale,
/// omitted fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub language: Option<String>,
    pub dietary_preferences: Option<TagSet>,
    pub medical_conditions: Option<TagSet>,
    pub medications: Option<TagSet>,
    pub allergies: Option<TagSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryOption {
    pub id: String,
    pub name: String,
    pub description: String,
}

const DIETARY_OPTIONS: [(&str, &str, &str); 4] = [
    ("vegan", "Vegan", "No animal products"),
    ("vegetarian", "Vegetarian", "No meat, fish, or poultry"),
    ("gluten-free", "Gluten-Free", "No wheat, barley, rye"),
    ("keto", "Keto", "Low-carb, high-fat"),
];

/// Dietary preferences the client offers as toggles. Profiles may still carry
/// ids outside this list.
pub fn dietary_options() -> Vec<DietaryOption> {
    DIETARY_OPTIONS
        .iter()
        .map(|(id, name, description)| DietaryOption {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}
