pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Profile;
pub use ports::{ProfileRepository, ProfileService};
pub use value_objects::{ProfileUpdate, TagSet};
