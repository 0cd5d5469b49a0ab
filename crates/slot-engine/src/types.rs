//! Core data types for availability matching.
//!
//! All timestamps are UTC; timezone resolution happens before data reaches the
//! engine. Intervals are half-open `[start, end)` throughout, so two intervals
//! that merely touch do not overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// A half-open time range `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Construct an interval, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(MatchError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Adjacent intervals (one ends exactly when the other starts) do NOT overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// How a recurring availability record repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Weekly,
    Biweekly,
    Monthly,
}

/// A user's self-reported free time. Multiple records per user may exist
/// (e.g., one per week); the engine flattens them for matching and never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub user_id: String,
    /// Week anchor carried over from the recording layer. Metadata only;
    /// matching reads the slots, not this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of: Option<DateTime<Utc>>,
    pub slots: Vec<TimeInterval>,
    /// When set, `slots` describe the first occurrence and the record repeats
    /// at this cadence until the end of the query window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrencePattern>,
}

/// Lifecycle status of a booked interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Proposed,
    Confirmed,
    Cancelled,
    Completed,
    Rescheduled,
}

impl InterviewStatus {
    /// Only active interviews block new candidate slots.
    pub fn is_active(&self) -> bool {
        matches!(self, InterviewStatus::Proposed | InterviewStatus::Confirmed)
    }
}

/// A committed or proposed time reservation for a (candidate, interviewer) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedInterview {
    pub candidate_id: String,
    pub interviewer_id: String,
    pub scheduled_time: TimeInterval,
    pub status: InterviewStatus,
}

/// A scored candidate slot of exactly the requested interview duration.
/// Ephemeral: produced fresh on every matching request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSlot {
    #[serde(flatten)]
    pub interval: TimeInterval,
    pub score: i32,
}
