pub mod engine;
pub mod entities;
pub mod exclusions;
pub mod ports;
pub mod services;

pub use engine::derive;
pub use entities::*;
pub use ports::RecommendationService;
