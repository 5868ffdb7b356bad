pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{ChatMessage, ChatRole};
pub use ports::{ChatRepository, ChatResponder, ChatService};
