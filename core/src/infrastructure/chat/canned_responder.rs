use std::sync::{Arc, Mutex};

use rand::Rng;
use tracing::error;

use crate::domain::{chat::ports::ChatResponder, common::entities::app_errors::CoreError};

pub const CANNED_REPLIES: [&str; 6] = [
    "That's a great question! Based on your health profile, I recommend focusing on whole foods rich in fiber and antioxidants.",
    "For your dietary preferences, try incorporating more plant-based proteins like quinoa, lentils, and chickpeas.",
    "Given your medical history, it's important to monitor sodium intake. Would you like some low-sodium recipe suggestions?",
    "I can help you create a personalized meal plan. What are your main health goals?",
    "That food item contains high levels of processed sugars. Consider alternatives like fresh fruits or nuts.",
    "Based on your recent scans, you're doing well with protein intake but could increase your vegetable consumption.",
];

/// Answers with a reply picked at random from a fixed list. No inference.
#[derive(Debug, Clone)]
pub struct CannedChatResponder<R> {
    rng: Arc<Mutex<R>>,
}

impl<R: Rng> CannedChatResponder<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

impl<R> ChatResponder for CannedChatResponder<R>
where
    R: Rng + Send,
{
    fn reply(&self, _message: &str) -> Result<String, CoreError> {
        let mut rng = self.rng.lock().map_err(|_| {
            error!("chat responder rng lock poisoned");
            CoreError::InternalServerError
        })?;

        let index = rng.gen_range(0..CANNED_REPLIES.len());
        Ok(CANNED_REPLIES[index].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_replies_come_from_canned_list() {
        let responder = CannedChatResponder::new(StdRng::seed_from_u64(3));
        for _ in 0..20 {
            let reply = responder.reply("hello").unwrap();
            assert!(CANNED_REPLIES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_replies() {
        let first = CannedChatResponder::new(StdRng::seed_from_u64(99));
        let second = CannedChatResponder::new(StdRng::seed_from_u64(99));

        let a: Vec<String> = (0..10).map(|_| first.reply("x").unwrap()).collect();
        let b: Vec<String> = (0..10).map(|_| second.reply("y").unwrap()).collect();
        assert_eq!(a, b);
    }
}
