use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unknown meal slot: {0}")]
    UnknownMealSlot(String),

    #[error("Unknown scan fixture: {0}")]
    UnknownScanFixture(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error")]
    InternalServerError,
}
