pub mod get_meal_slot;
pub mod get_recommendations;
