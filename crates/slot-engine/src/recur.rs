//! Expand recurring availability records into concrete occurrences.
//!
//! A record marked weekly/biweekly/monthly describes its first occurrence in
//! `slots`; this module projects those slots forward through the query window
//! using the `rrule` crate, with DST-correct local-time repetition via
//! `chrono-tz`. Callers that keep availability in UTC pass `"UTC"`.

use chrono::{DateTime, Duration, Utc};
use rrule::RRuleSet;

use crate::error::{MatchError, Result};
use crate::types::{AvailabilityRecord, RecurrencePattern, TimeInterval};

/// Hard cap on instances per base slot, so a missing/huge window can never
/// cause unbounded expansion.
const MAX_OCCURRENCES: u16 = 500;

impl RecurrencePattern {
    fn as_rrule(&self) -> &'static str {
        match self {
            RecurrencePattern::Weekly => "FREQ=WEEKLY",
            RecurrencePattern::Biweekly => "FREQ=WEEKLY;INTERVAL=2",
            RecurrencePattern::Monthly => "FREQ=MONTHLY",
        }
    }
}

/// Expand a recurring record's base slots into every occurrence that overlaps
/// `window`. The base slots count as the first occurrence. Returns an empty
/// list for records without a recurrence pattern.
///
/// Expansion walks forward from each base slot and is capped at 500 instances
/// per slot, so a base slot more than 500 periods before the window (roughly
/// 9.6 years for a weekly pattern) contributes no in-window occurrences.
///
/// # Errors
/// Returns `MatchError::InvalidRecurrence` if `timezone` is not a valid IANA
/// identifier or the generated rule fails to parse.
pub fn expand_recurring(
    record: &AvailabilityRecord,
    window: &TimeInterval,
    timezone: &str,
) -> Result<Vec<TimeInterval>> {
    let Some(pattern) = record.recurrence else {
        return Ok(Vec::new());
    };

    // Validate the timezone by parsing it as a chrono-tz Tz.
    let tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| MatchError::InvalidRecurrence(format!("invalid timezone: {timezone}")))?;

    let mut occurrences = Vec::new();
    for slot in &record.slots {
        let duration = Duration::minutes(slot.duration_minutes());
        for start in expand_slot_starts(slot.start, pattern, window.end, tz, timezone)? {
            let occurrence = TimeInterval {
                start,
                end: start + duration,
            };
            if occurrence.overlaps(window) {
                occurrences.push(occurrence);
            }
        }
    }

    Ok(occurrences)
}

/// Expand one base start into its recurrence instances up to `until`.
fn expand_slot_starts(
    base_start: DateTime<Utc>,
    pattern: RecurrencePattern,
    until: DateTime<Utc>,
    tz: chrono_tz::Tz,
    timezone: &str,
) -> Result<Vec<DateTime<Utc>>> {
    // DTSTART is expressed in the record's local timezone so that repetition
    // keeps the local wall-clock time across DST changes. UNTIL must always
    // be UTC (trailing Z) when DTSTART carries a TZID; the wall-clock
    // behavior is governed by DTSTART's timezone, not UNTIL's representation.
    let dtstart_ical = format_local(base_start, tz);
    let until_ical = until.format("%Y%m%dT%H%M%SZ").to_string();

    let rrule_text = format!(
        "DTSTART;TZID={}:{}\nRRULE:{};UNTIL={}",
        timezone,
        dtstart_ical,
        pattern.as_rrule(),
        until_ical
    );

    let rrule_set: RRuleSet = rrule_text
        .parse()
        .map_err(|e| MatchError::InvalidRecurrence(format!("{e}")))?;

    let instances = rrule_set.all(MAX_OCCURRENCES);
    Ok(instances
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc))
        .collect())
}

/// Format a UTC instant as a local iCalendar datetime ("20260302T090000").
fn format_local(instant: DateTime<Utc>, tz: chrono_tz::Tz) -> String {
    instant
        .with_timezone(&tz)
        .naive_local()
        .format("%Y%m%dT%H%M%S")
        .to_string()
}
