//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid interval: start is after end")]
    InvalidInterval,

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
