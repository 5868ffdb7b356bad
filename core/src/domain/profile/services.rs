use tracing::info;
use uuid::Uuid;

use crate::domain::{
    chat::ports::{ChatRepository, ChatResponder},
    common::{entities::app_errors::CoreError, services::Service},
    profile::{
        entities::Profile,
        ports::{ProfileRepository, ProfileService},
        value_objects::ProfileUpdate,
    },
    scan::ports::ScanSource,
};

impl<P, CH, SC, AR> ProfileService for Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    async fn get_profile(&self, session_id: Uuid) -> Result<Profile, CoreError> {
        self.profile_repository.find(session_id).await
    }

    async fn update_profile(
        &self,
        session_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, CoreError> {
        let profile = self.profile_repository.update(session_id, update).await?;

        info!(
            %session_id,
            dietary_preferences = profile.dietary_preferences.len(),
            medical_conditions = profile.medical_conditions.len(),
            allergies = profile.allergies.len(),
            "profile updated"
        );

        Ok(profile)
    }
}
