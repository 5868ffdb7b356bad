use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SendChatMessageValidator {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "message must be between 1 and 2000 characters"
    ))]
    pub message: String,
}
