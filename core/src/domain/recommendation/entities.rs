use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownMealSlot(s.to_string()))
    }
}

/// Candidate meal names for each slot, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSlots {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub snacks: Vec<String>,
}

impl MealSlots {
    pub fn slot(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<String> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }
}

/// Static reference table the meal plan is filtered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCatalog(MealSlots);

impl MealCatalog {
    pub fn new(slots: MealSlots) -> Self {
        Self(slots)
    }

    pub fn slot(&self, slot: MealSlot) -> &[String] {
        self.0.slot(slot)
    }

    pub fn slots(&self) -> &MealSlots {
        &self.0
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|name| name.to_string()).collect()
        }

        Self(MealSlots {
            breakfast: owned(&[
                "Oatmeal with fresh berries",
                "Greek yogurt parfait",
                "Avocado toast with eggs",
                "Smoothie bowl with spinach",
            ]),
            lunch: owned(&[
                "Quinoa salad with vegetables",
                "Grilled chicken with brown rice",
                "Lentil soup with whole grain bread",
                "Mediterranean bowl with hummus",
            ]),
            dinner: owned(&[
                "Baked salmon with sweet potato",
                "Tofu stir-fry with vegetables",
                "Turkey meatballs with zucchini noodles",
                "Chickpea curry with cauliflower rice",
            ]),
            snacks: owned(&[
                "Apple slices with almond butter",
                "Mixed nuts and seeds",
                "Hummus with cucumber",
                "Berries with dark chocolate",
            ]),
        })
    }
}

/// Per-slot candidates left after the profile's exclusions.
pub type MealPlan = MealSlots;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSlotPlan {
    pub slot: MealSlot,
    pub meals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonalizedContent {
    pub meal_plan: MealPlan,
    pub health_tips: Vec<String>,
    pub weekly_insights: Vec<String>,
}
