pub mod catalog;
pub mod chat;
pub mod health;
pub mod profile;
pub mod recommendation;
pub mod scan;
pub mod server;
pub mod workout;
