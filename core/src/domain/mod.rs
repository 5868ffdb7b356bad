pub mod chat;
pub mod common;
pub mod profile;
pub mod recommendation;
pub mod scan;
pub mod tip;
pub mod workout;
