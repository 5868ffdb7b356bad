pub mod entities;
pub mod generator;
pub mod ports;
pub mod services;

pub use entities::{Exercise, WorkoutPlan};
pub use ports::WorkoutService;
