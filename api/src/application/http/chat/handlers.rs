pub mod get_chat_history;
pub mod send_chat_message;
