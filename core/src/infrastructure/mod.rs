pub mod chat;
pub mod scan;
pub mod session;
