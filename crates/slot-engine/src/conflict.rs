//! Filter candidate slots against already-booked interviews.
//!
//! Stage 3 of the matching pipeline. A slot is dropped when it overlaps any
//! active (proposed or confirmed) interview's scheduled time, regardless of
//! whether that booking came from this matching flow or was entered manually.
//! Adjacent slots (touching but not overlapping) survive; cancelled,
//! completed, and rescheduled interviews never block.

use crate::types::{BookedInterview, TimeInterval};

/// Does `slot` overlap any active booking?
pub fn has_conflict(slot: &TimeInterval, bookings: &[BookedInterview]) -> bool {
    bookings
        .iter()
        .any(|b| b.status.is_active() && slot.overlaps(&b.scheduled_time))
}

/// Remove every slot that conflicts with an active booking, preserving order.
/// A fully-booked (empty) result is valid, not an error.
pub fn filter_conflicts(
    slots: Vec<TimeInterval>,
    bookings: &[BookedInterview],
) -> Vec<TimeInterval> {
    slots
        .into_iter()
        .filter(|slot| !has_conflict(slot, bookings))
        .collect()
}
