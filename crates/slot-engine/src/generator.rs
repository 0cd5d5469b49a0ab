//! Generate fixed-duration candidate slots from overlapping availability.
//!
//! Stage 2 of the matching pipeline. For every pair of intervals from the two
//! users, the overlap window is `[max(starts), min(ends))`; when it is long
//! enough, a cursor walks forward from the overlap start in fixed steps,
//! emitting one candidate slot per step. The coarse step trades exhaustive
//! minute-resolution start times for a bounded, human-palatable result set.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::types::TimeInterval;

/// Emit every candidate slot of exactly `duration_minutes` that fits inside an
/// overlap of one candidate interval and one interviewer interval, stepped at
/// `step_minutes` granularity.
///
/// Slots are deduplicated by `(start, end)` value — a slot reachable through
/// multiple interval pairs appears once, at its first emission position. An
/// empty result is valid and means "no overlap of sufficient length".
///
/// Complexity is O(|A|·|B|·W) where W is the number of steps per overlap;
/// both lists are bounded by a realistic planning horizon.
pub fn generate_candidate_slots(
    candidate: &[TimeInterval],
    interviewer: &[TimeInterval],
    duration_minutes: u32,
    step_minutes: u32,
) -> Vec<TimeInterval> {
    let duration = Duration::minutes(i64::from(duration_minutes));
    let step = Duration::minutes(i64::from(step_minutes));

    let mut seen: HashSet<(DateTime<Utc>, DateTime<Utc>)> = HashSet::new();
    let mut slots = Vec::new();

    for a in candidate {
        for b in interviewer {
            let overlap_start = a.start.max(b.start);
            let overlap_end = a.end.min(b.end);

            if overlap_end - overlap_start < duration {
                continue;
            }

            let mut cursor = overlap_start;
            while cursor + duration <= overlap_end {
                if seen.insert((cursor, cursor + duration)) {
                    slots.push(TimeInterval {
                        start: cursor,
                        end: cursor + duration,
                    });
                }
                cursor += step;
            }
        }
    }

    slots
}
