use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no complaint with id {0}")]
    UnknownComplaint(Uuid),

    #[error("invalid step: {0}")]
    InvalidStep(u8),

    #[error("step {step} has not been reached yet (furthest: {max_reached})")]
    StepNotReached { step: u8, max_reached: u8 },
}
