use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::entities::{MealSlotPlan, PersonalizedContent},
};

pub trait RecommendationService: Send + Sync {
    fn get_recommendations(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<PersonalizedContent, CoreError>> + Send;

    /// One slot of the session's meal plan. `slot` is the raw slot name;
    /// unknown names yield [`CoreError::UnknownMealSlot`].
    fn get_meal_slot(
        &self,
        session_id: Uuid,
        slot: &str,
    ) -> impl Future<Output = Result<MealSlotPlan, CoreError>> + Send;
}
