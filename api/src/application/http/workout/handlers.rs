pub mod get_workout;
