pub mod fixture_source;
pub mod fixtures;

pub use fixture_source::FixtureScanSource;
