//! # slot-engine
//!
//! Availability matching and interview slot scoring.
//!
//! Given a candidate's and an interviewer's recorded availability plus their
//! already-booked interviews, the engine computes mutually free,
//! conflict-free, fixed-duration time windows, scores them with a tunable
//! heuristic, and returns the top N. The computation is a linear four-stage
//! pipeline of pure functions; persistence, auth, and delivery live behind
//! the [`matcher::SchedulingStore`] seam.
//!
//! ## Modules
//!
//! - [`flatten`] — availability records → one sorted interval list
//! - [`recur`] — recurring-availability expansion into concrete occurrences
//! - [`generator`] — interval overlaps → fixed-duration candidate slots
//! - [`conflict`] — drop slots that double-book either party
//! - [`scoring`] — heuristic scoring policy and stable ranking
//! - [`matcher`] — pipeline orchestration and request options
//! - [`types`] — intervals, availability, bookings, ranked slots
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod flatten;
pub mod generator;
pub mod matcher;
pub mod recur;
pub mod scoring;
pub mod types;

pub use error::MatchError;
pub use matcher::{find_optimal_slots, find_optimal_slots_between, MatchOptions, SchedulingStore};
pub use scoring::{PreferredHours, ScoringPolicy};
pub use types::{
    AvailabilityRecord, BookedInterview, InterviewStatus, RankedSlot, RecurrencePattern,
    TimeInterval,
};
