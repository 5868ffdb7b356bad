use uuid::Uuid;

use crate::domain::{
    chat::ports::{ChatRepository, ChatResponder},
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::ProfileRepository,
    scan::ports::ScanSource,
    workout::{entities::WorkoutPlan, generator::select_workout, ports::WorkoutService},
};

impl<P, CH, SC, AR> WorkoutService for Service<P, CH, SC, AR>
where
    P: ProfileRepository,
    CH: ChatRepository,
    SC: ScanSource,
    AR: ChatResponder,
{
    async fn get_workout(&self, session_id: Uuid) -> Result<WorkoutPlan, CoreError> {
        let profile = self.profile_repository.find(session_id).await?;
        Ok(select_workout(&profile))
    }
}
