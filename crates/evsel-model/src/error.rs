use thiserror::Error;

use crate::TimestampMs;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("class index {index} out of range for alias {alias} (expected 0..=99)")]
    ClassIndexOutOfRange { alias: u32, index: u32 },
    #[error("invalid validity window: start {start} is after end {end}")]
    InvalidWindow { start: TimestampMs, end: TimestampMs },
}
