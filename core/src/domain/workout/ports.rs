use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, workout::entities::WorkoutPlan};

pub trait WorkoutService: Send + Sync {
    fn get_workout(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<WorkoutPlan, CoreError>> + Send;
}
