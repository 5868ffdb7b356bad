pub mod canned_responder;

pub use canned_responder::CannedChatResponder;
