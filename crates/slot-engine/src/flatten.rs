//! Flatten availability records into a single sorted interval list.
//!
//! Stage 1 of the matching pipeline. Intervals from different records are NOT
//! merged even if they touch or overlap; downstream overlap computation is
//! commutative and duplicate-safe, and the generator deduplicates emitted
//! slots. Intervals partially overlapping the query window are preserved
//! as-is — clipping, if desired, is the caller's responsibility.

use crate::error::Result;
use crate::recur;
use crate::types::{AvailabilityRecord, TimeInterval};

/// Flatten the concrete slots of `records` into one list sorted ascending by
/// start (then end), restricted to slots overlapping `window` when a window
/// is given. Recurrence metadata is ignored here; see [`flatten_with_recurrence`].
pub fn flatten_availability(
    records: &[AvailabilityRecord],
    window: Option<&TimeInterval>,
) -> Vec<TimeInterval> {
    let mut intervals: Vec<TimeInterval> = records
        .iter()
        .flat_map(|r| r.slots.iter().copied())
        .filter(|slot| window.is_none_or(|w| slot.overlaps(w)))
        .collect();

    intervals.sort_by_key(|slot| (slot.start, slot.end));
    intervals
}

/// Flatten `records` into one sorted interval list, expanding recurring
/// records into their concrete occurrences within `window` first.
///
/// Non-recurring records contribute their slots directly (window-filtered);
/// recurring records contribute the occurrences produced by
/// [`recur::expand_recurring`], which include the base slots themselves.
pub fn flatten_with_recurrence(
    records: &[AvailabilityRecord],
    window: &TimeInterval,
    timezone: &str,
) -> Result<Vec<TimeInterval>> {
    let mut intervals: Vec<TimeInterval> = Vec::new();

    for record in records {
        if record.recurrence.is_some() {
            intervals.extend(recur::expand_recurring(record, window, timezone)?);
        } else {
            intervals.extend(
                record
                    .slots
                    .iter()
                    .copied()
                    .filter(|slot| slot.overlaps(window)),
            );
        }
    }

    intervals.sort_by_key(|slot| (slot.start, slot.end));
    Ok(intervals)
}
