use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    chat::ports::{ChatRepository, ChatResponder},
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::ProfileRepository,
    recommendation::{
        engine::derive,
        entities::{MealSlot, MealSlotPlan, PersonalizedContent},
        exclusions::filter_meal_plan,
        ports::RecommendationService,
    },
    scan::ports::ScanSource,
};

impl<P, CH, SC, AR> RecommendationService for Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    async fn get_recommendations(&self, session_id: Uuid) -> Result<PersonalizedContent, CoreError> {
        let profile = self.profile_repository.find(session_id).await?;
        let content = derive(&profile, &self.catalog);

        debug!(
            %session_id,
            health_tips = content.health_tips.len(),
            "derived personalized content"
        );

        Ok(content)
    }

    async fn get_meal_slot(&self, session_id: Uuid, slot: &str) -> Result<MealSlotPlan, CoreError> {
        let slot: MealSlot = slot.parse()?;
        let profile = self.profile_repository.find(session_id).await?;
        let mut plan = filter_meal_plan(&profile, &self.catalog);

        Ok(MealSlotPlan {
            slot,
            meals: std::mem::take(plan.slot_mut(slot)),
        })
    }
}
