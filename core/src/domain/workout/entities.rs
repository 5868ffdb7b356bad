use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    /// `None` when the exercise is done in one go.
    pub rest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutPlan {
    pub title: String,
    pub duration_minutes: u32,
    pub exercises: Vec<Exercise>,
    pub benefits: Vec<String>,
}
