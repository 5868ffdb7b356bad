pub mod get_dietary_options;
pub mod get_tip;
