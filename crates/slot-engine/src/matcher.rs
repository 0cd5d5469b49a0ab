//! The four-stage matching pipeline and its collaborator seam.
//!
//! Data flows one way: availability records → flattened intervals → candidate
//! slots → conflict-filtered slots → ranked result. No stage mutates a
//! previous stage's output, and the whole computation is synchronous and pure
//! given its snapshots — concurrent requests for different user pairs need no
//! coordination.

use chrono::{DateTime, Duration, Utc};

use crate::conflict;
use crate::error::{MatchError, Result};
use crate::flatten;
use crate::generator;
use crate::scoring::{self, PreferredHours, ScoringPolicy};
use crate::types::{AvailabilityRecord, BookedInterview, RankedSlot, TimeInterval};

pub const MIN_DURATION_MINUTES: u32 = 15;
pub const MAX_DURATION_MINUTES: u32 = 480;
pub const DEFAULT_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_MAX_SLOTS: usize = 3;
pub const DEFAULT_STEP_MINUTES: u32 = 30;
pub const DEFAULT_WINDOW_DAYS: i64 = 14;

/// Options for one matching request.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Interview length in minutes. Valid range 15-480.
    pub duration_minutes: u32,
    /// Maximum number of ranked slots to return.
    pub max_slots: usize,
    /// Query window the availability and booking snapshots were fetched for.
    pub window: TimeInterval,
    /// Overrides the policy's business-hours window when set.
    pub preferred_hours: Option<PreferredHours>,
    /// Candidate start times are stepped at this granularity inside each
    /// overlap. Independent of `duration_minutes` on purpose.
    pub step_minutes: u32,
    /// The clock used for recency scoring. Injected so identical inputs yield
    /// identical output.
    pub now: DateTime<Utc>,
    pub policy: ScoringPolicy,
    /// IANA timezone for recurring-availability expansion.
    pub timezone: String,
}

impl MatchOptions {
    /// Defaults matching the scheduling product: 60-minute interviews, top 3
    /// slots, a two-week window starting now, 30-minute step, UTC recurrence.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            duration_minutes: DEFAULT_DURATION_MINUTES,
            max_slots: DEFAULT_MAX_SLOTS,
            window: TimeInterval {
                start: now,
                end: now + Duration::days(DEFAULT_WINDOW_DAYS),
            },
            preferred_hours: None,
            step_minutes: DEFAULT_STEP_MINUTES,
            now,
            policy: ScoringPolicy::default(),
            timezone: "UTC".to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(MatchError::InvalidDuration(self.duration_minutes));
        }
        if self.step_minutes == 0 {
            return Err(MatchError::InvalidStep(self.step_minutes));
        }
        if self.window.end <= self.window.start {
            return Err(MatchError::InvalidWindow);
        }
        Ok(())
    }
}

/// Run the full pipeline over pre-fetched snapshots.
///
/// Input is validated up front: a malformed interval anywhere in the
/// availability or booking data is a caller error, surfaced before any
/// computation. An empty result is NOT an error — it is the legitimate
/// "no matching slots" business outcome.
pub fn find_optimal_slots(
    candidate_availability: &[AvailabilityRecord],
    interviewer_availability: &[AvailabilityRecord],
    bookings: &[BookedInterview],
    options: &MatchOptions,
) -> Result<Vec<RankedSlot>> {
    options.validate()?;
    validate_records(candidate_availability)?;
    validate_records(interviewer_availability)?;
    for booking in bookings {
        validate_interval(&booking.scheduled_time)?;
    }

    let candidate =
        flatten::flatten_with_recurrence(candidate_availability, &options.window, &options.timezone)?;
    let interviewer = flatten::flatten_with_recurrence(
        interviewer_availability,
        &options.window,
        &options.timezone,
    )?;

    let generated = generator::generate_candidate_slots(
        &candidate,
        &interviewer,
        options.duration_minutes,
        options.step_minutes,
    );

    let free = conflict::filter_conflicts(generated, bookings);

    Ok(scoring::rank_slots(
        free,
        &options.policy,
        options.preferred_hours.as_ref(),
        options.now,
        options.max_slots,
    ))
}

fn validate_records(records: &[AvailabilityRecord]) -> Result<()> {
    for record in records {
        for slot in &record.slots {
            validate_interval(slot)?;
        }
    }
    Ok(())
}

fn validate_interval(interval: &TimeInterval) -> Result<()> {
    if interval.end <= interval.start {
        return Err(MatchError::InvalidInterval {
            start: interval.start,
            end: interval.end,
        });
    }
    Ok(())
}

/// Collaborator seam for the surrounding system. Implementations fetch the
/// snapshots the pipeline consumes; the engine never writes through this
/// trait.
///
/// Two concurrent matching requests for the same pair can both see a
/// not-yet-committed slot as free. Guarding the eventual booking write (e.g.
/// a uniqueness constraint or compare-and-swap) belongs to the store
/// implementation, not to this engine.
pub trait SchedulingStore {
    /// All availability records for `user_id` intersecting `window`.
    /// Returns `MatchError::UnknownUser` for an unknown identity.
    fn availability(&self, user_id: &str, window: &TimeInterval)
        -> Result<Vec<AvailabilityRecord>>;

    /// Interviews involving either party within `window`, already filtered to
    /// active (proposed or confirmed) status.
    fn active_interviews(
        &self,
        candidate_id: &str,
        interviewer_id: &str,
        window: &TimeInterval,
    ) -> Result<Vec<BookedInterview>>;
}

/// Fetch both users' availability and their active bookings from `store`,
/// then run [`find_optimal_slots`].
pub fn find_optimal_slots_between<S: SchedulingStore>(
    store: &S,
    candidate_id: &str,
    interviewer_id: &str,
    options: &MatchOptions,
) -> Result<Vec<RankedSlot>> {
    options.validate()?;

    let candidate_availability = store.availability(candidate_id, &options.window)?;
    let interviewer_availability = store.availability(interviewer_id, &options.window)?;
    let bookings = store.active_interviews(candidate_id, interviewer_id, &options.window)?;

    find_optimal_slots(
        &candidate_availability,
        &interviewer_availability,
        &bookings,
        options,
    )
}
