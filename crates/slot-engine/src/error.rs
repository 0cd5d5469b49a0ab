//! Error types for slot-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid duration: {0} minutes (allowed range is 15-480)")]
    InvalidDuration(u32),

    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid query window: end must be after start")]
    InvalidWindow,

    #[error("Invalid step: {0} minutes (must be at least 1)")]
    InvalidStep(u32),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;
