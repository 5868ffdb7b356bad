use crate::domain::{
    profile::entities::Profile,
    recommendation::{
        entities::{MealCatalog, PersonalizedContent},
        exclusions::filter_meal_plan,
    },
};

const HYPERTENSION_TIPS: [&str; 2] = [
    "Limit sodium intake to less than 2,300mg per day",
    "Include potassium-rich foods like bananas and spinach",
];

const DIABETES_TIPS: [&str; 2] = [
    "Monitor carbohydrate intake and choose complex carbs",
    "Eat regular meals to maintain stable blood sugar",
];

const GENERAL_TIPS: [&str; 2] = [
    "Stay hydrated with 8 glasses of water daily",
    "Include colorful vegetables in every meal",
];

/// Meal plan, health tips and weekly insights for `profile`.
///
/// Pure: equal inputs always give equal output.
pub fn derive(profile: &Profile, catalog: &MealCatalog) -> PersonalizedContent {
    PersonalizedContent {
        meal_plan: filter_meal_plan(profile, catalog),
        health_tips: health_tips(profile),
        weekly_insights: weekly_insights(profile),
    }
}

pub fn health_tips(profile: &Profile) -> Vec<String> {
    let mut tips = Vec::new();

    if profile.has_condition("Hypertension") {
        tips.extend(HYPERTENSION_TIPS);
    }
    if profile.has_condition("Diabetes") {
        tips.extend(DIABETES_TIPS);
    }
    tips.extend(GENERAL_TIPS);

    tips.into_iter().map(String::from).collect()
}

pub fn weekly_insights(profile: &Profile) -> Vec<String> {
    let preferences = if profile.dietary_preferences.is_empty() {
        "current".to_string()
    } else {
        profile.dietary_preferences.join(", ")
    };

    let condition_insight = match profile.medical_conditions.first() {
        Some(condition) => format!("Managing {condition} through diet shows excellent progress"),
        None => "Your consistent healthy choices are paying off".to_string(),
    };

    vec![
        format!("Based on your {preferences} dietary preferences, you're doing great!"),
        "Your fiber intake has improved this week - keep it up!".to_string(),
        condition_insight,
        "Consider meal prepping to maintain your healthy eating pattern".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::value_objects::TagSet;

    #[test]
    fn test_derive_for_unrestricted_profile() {
        let catalog = MealCatalog::default();
        let content = derive(&Profile::unrestricted(), &catalog);

        assert_eq!(&content.meal_plan, catalog.slots());
        assert_eq!(content.health_tips, GENERAL_TIPS.to_vec());
        assert_eq!(
            content.weekly_insights[0],
            "Based on your current dietary preferences, you're doing great!"
        );
        assert_eq!(
            content.weekly_insights[2],
            "Your consistent healthy choices are paying off"
        );
        assert_eq!(content.weekly_insights.len(), 4);
    }

    #[test]
    fn test_health_tips_are_ordered_by_condition() {
        let profile = Profile {
            medical_conditions: TagSet::from(["diabetes", "Hypertension"]),
            ..Profile::unrestricted()
        };

        assert_eq!(
            health_tips(&profile),
            vec![
                HYPERTENSION_TIPS[0],
                HYPERTENSION_TIPS[1],
                DIABETES_TIPS[0],
                DIABETES_TIPS[1],
                GENERAL_TIPS[0],
                GENERAL_TIPS[1],
            ]
        );
    }

    #[test]
    fn test_general_tips_always_last() {
        let tips = health_tips(&Profile::default());
        assert_eq!(tips.len(), 4);
        assert_eq!(&tips[2..], &GENERAL_TIPS.map(String::from));
    }

    #[test]
    fn test_weekly_insights_interpolate_profile() {
        let profile = Profile {
            dietary_preferences: TagSet::from(["vegan", "gluten-free"]),
            medical_conditions: TagSet::from(["Celiac disease", "Hypertension"]),
            ..Profile::unrestricted()
        };
        let insights = weekly_insights(&profile);

        assert_eq!(
            insights[0],
            "Based on your vegan, gluten-free dietary preferences, you're doing great!"
        );
        assert_eq!(
            insights[2],
            "Managing Celiac disease through diet shows excellent progress"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let catalog = MealCatalog::default();
        let profile = Profile::default();
        assert_eq!(derive(&profile, &catalog), derive(&profile, &catalog));
    }
}
