//! Score candidate slots and rank them by desirability.
//!
//! Stage 4 of the matching pipeline. The weights are a policy table, not
//! algorithmic constants: [`ScoringPolicy::default`] carries the stock
//! heuristic, and callers may override any weight or boundary without touching
//! the pipeline. Adjustments are independent and additive — no clamping, so
//! scores may exceed the base or go negative.
//!
//! Hour-of-day and weekday are evaluated in UTC on the slot's start. Recency
//! is measured against an injected `now`, keeping scoring deterministic.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::{RankedSlot, TimeInterval};

/// A preferred hour-of-day window `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

/// Tunable scoring weights and the hour/day boundaries they read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Starting score for every slot.
    pub base: i32,
    /// Added when the start hour falls in the preferred (or business-hours) window.
    pub business_hours_bonus: i32,
    /// Added when the start weekday is Tuesday through Thursday.
    pub midweek_bonus: i32,
    /// Added when the start hour falls in `morning_hours`. Stacks with the
    /// business-hours bonus.
    pub morning_bonus: i32,
    /// Subtracted when the start hour is before `early_cutoff_hour` or at/after
    /// `late_cutoff_hour`.
    pub off_hours_penalty: i32,
    /// Added when the slot starts within `soon_days` of now.
    pub soon_bonus: i32,
    /// Subtracted when the slot starts more than `distant_days` out.
    pub distant_penalty: i32,

    /// Fallback window when the caller supplies no preferred hours.
    pub business_hours: PreferredHours,
    pub morning_hours: PreferredHours,
    pub early_cutoff_hour: u32,
    pub late_cutoff_hour: u32,
    pub soon_days: i64,
    pub distant_days: i64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base: 100,
            business_hours_bonus: 20,
            midweek_bonus: 15,
            morning_bonus: 10,
            off_hours_penalty: 20,
            soon_bonus: 5,
            distant_penalty: 5,
            business_hours: PreferredHours {
                start_hour: 9,
                end_hour: 17,
            },
            morning_hours: PreferredHours {
                start_hour: 9,
                end_hour: 12,
            },
            early_cutoff_hour: 8,
            late_cutoff_hour: 18,
            soon_days: 3,
            distant_days: 7,
        }
    }
}

/// Score a single slot under `policy`.
///
/// `preferred` overrides the policy's business-hours window for the first
/// bonus only; the morning bonus and the early/late penalty keep their own
/// boundaries.
pub fn score_slot(
    slot: &TimeInterval,
    policy: &ScoringPolicy,
    preferred: Option<&PreferredHours>,
    now: DateTime<Utc>,
) -> i32 {
    let hour = slot.start.hour();
    let weekday = slot.start.weekday();
    let mut score = policy.base;

    let window = preferred.unwrap_or(&policy.business_hours);
    if hour >= window.start_hour && hour < window.end_hour {
        score += policy.business_hours_bonus;
    }

    if matches!(weekday, Weekday::Tue | Weekday::Wed | Weekday::Thu) {
        score += policy.midweek_bonus;
    }

    if hour >= policy.morning_hours.start_hour && hour < policy.morning_hours.end_hour {
        score += policy.morning_bonus;
    }

    if hour < policy.early_cutoff_hour || hour >= policy.late_cutoff_hour {
        score -= policy.off_hours_penalty;
    }

    // Fractional days, to match "starts within 3 days" rather than calendar days.
    let days_out = (slot.start - now).num_seconds() as f64 / 86_400.0;
    if days_out <= policy.soon_days as f64 {
        score += policy.soon_bonus;
    } else if days_out > policy.distant_days as f64 {
        score -= policy.distant_penalty;
    }

    score
}

/// Score every slot, sort descending by score, and keep the top `max_slots`.
///
/// The sort is stable: equal-score slots keep the relative order the generator
/// produced them in.
pub fn rank_slots(
    slots: Vec<TimeInterval>,
    policy: &ScoringPolicy,
    preferred: Option<&PreferredHours>,
    now: DateTime<Utc>,
    max_slots: usize,
) -> Vec<RankedSlot> {
    let mut ranked: Vec<RankedSlot> = slots
        .into_iter()
        .map(|interval| RankedSlot {
            interval,
            score: score_slot(&interval, policy, preferred, now),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(max_slots);
    ranked
}
