pub mod adjuster;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use adjuster::adjust;
pub use entities::*;
pub use ports::{ScanService, ScanSource};
pub use value_objects::{ScanFixture, ScanQuery};
