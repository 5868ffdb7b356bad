use crate::domain::{
    common::contains_ignore_case,
    profile::entities::Profile,
    recommendation::entities::{MealCatalog, MealPlan, MealSlot},
};

/// Profile attribute that switches an exclusion rule on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTrigger {
    DietaryPreference(&'static str),
    Allergy(&'static str),
}

impl RuleTrigger {
    pub fn is_active(&self, profile: &Profile) -> bool {
        match self {
            RuleTrigger::DietaryPreference(preference) => {
                profile.has_dietary_preference(preference)
            }
            RuleTrigger::Allergy(allergy) => profile.has_allergy(allergy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionRule {
    pub trigger: RuleTrigger,
    pub slot: MealSlot,
    pub banned: &'static [&'static str],
}

pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        trigger: RuleTrigger::DietaryPreference("vegan"),
        slot: MealSlot::Breakfast,
        banned: &["yogurt", "eggs"],
    },
    ExclusionRule {
        trigger: RuleTrigger::DietaryPreference("vegan"),
        slot: MealSlot::Lunch,
        banned: &["chicken"],
    },
    ExclusionRule {
        trigger: RuleTrigger::DietaryPreference("vegan"),
        slot: MealSlot::Dinner,
        banned: &["salmon", "turkey"],
    },
    ExclusionRule {
        trigger: RuleTrigger::Allergy("Nuts"),
        slot: MealSlot::Snacks,
        banned: &["nuts", "almond"],
    },
    ExclusionRule {
        trigger: RuleTrigger::Allergy("Dairy"),
        slot: MealSlot::Breakfast,
        banned: &["yogurt"],
    },
];

/// Banned substrings in force for `slot` under `profile`.
pub fn banned_for_slot(profile: &Profile, slot: MealSlot) -> Vec<&'static str> {
    EXCLUSION_RULES
        .iter()
        .filter(|rule| rule.slot == slot && rule.trigger.is_active(profile))
        .flat_map(|rule| rule.banned.iter().copied())
        .collect()
}

/// Filters every slot independently, keeping catalog order. A slot may end up
/// empty; no substitute is offered.
pub fn filter_meal_plan(profile: &Profile, catalog: &MealCatalog) -> MealPlan {
    let mut plan = MealPlan::default();

    for slot in MealSlot::ALL {
        let banned = banned_for_slot(profile, slot);
        *plan.slot_mut(slot) = catalog
            .slot(slot)
            .iter()
            .filter(|meal| !banned.iter().any(|word| contains_ignore_case(meal, word)))
            .cloned()
            .collect();
    }

    plan
}
