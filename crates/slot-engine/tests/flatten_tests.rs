//! Tests for availability flattening.

use chrono::{TimeZone, Utc};
use slot_engine::flatten::flatten_availability;
use slot_engine::types::{AvailabilityRecord, TimeInterval};

/// Helper to create a TimeInterval from hour ranges on a given day.
fn interval(
    year: i32,
    month: u32,
    day: u32,
    start_hour: u32,
    start_min: u32,
    end_hour: u32,
    end_min: u32,
) -> TimeInterval {
    TimeInterval {
        start: Utc
            .with_ymd_and_hms(year, month, day, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(year, month, day, end_hour, end_min, 0)
            .unwrap(),
    }
}

fn record(user_id: &str, slots: Vec<TimeInterval>) -> AvailabilityRecord {
    AvailabilityRecord {
        user_id: user_id.to_string(),
        week_of: None,
        slots,
        recurrence: None,
    }
}

#[test]
fn empty_input_produces_empty_output() {
    assert!(flatten_availability(&[], None).is_empty());

    let empty_record = record("alice", vec![]);
    assert!(flatten_availability(&[empty_record], None).is_empty());
}

#[test]
fn slots_from_multiple_records_sorted_by_start() {
    // Two records, slots deliberately out of order across them.
    let a = record(
        "alice",
        vec![
            interval(2026, 3, 4, 14, 0, 16, 0),
            interval(2026, 3, 2, 9, 0, 11, 0),
        ],
    );
    let b = record("alice", vec![interval(2026, 3, 3, 10, 0, 12, 0)]);

    let flat = flatten_availability(&[a, b], None);

    assert_eq!(flat.len(), 3);
    assert!(flat.windows(2).all(|w| w[0].start <= w[1].start));
    assert_eq!(flat[0], interval(2026, 3, 2, 9, 0, 11, 0));
    assert_eq!(flat[2], interval(2026, 3, 4, 14, 0, 16, 0));
}

#[test]
fn overlapping_slots_are_not_merged() {
    // Redundant overlapping intervals from different records stay separate;
    // the generator is duplicate-safe downstream.
    let a = record("alice", vec![interval(2026, 3, 2, 9, 0, 11, 0)]);
    let b = record("alice", vec![interval(2026, 3, 2, 10, 0, 12, 0)]);

    let flat = flatten_availability(&[a, b], None);

    assert_eq!(flat.len(), 2, "overlapping slots must be preserved as-is");
}

#[test]
fn window_restricts_but_does_not_clip() {
    let window = interval(2026, 3, 2, 0, 0, 23, 0);
    let a = record(
        "alice",
        vec![
            // Entirely inside the window.
            interval(2026, 3, 2, 9, 0, 11, 0),
            // Entirely outside the window — dropped.
            interval(2026, 3, 10, 9, 0, 11, 0),
            // Straddles the window end — kept, edges untouched.
            interval(2026, 3, 2, 22, 0, 23, 30),
        ],
    );

    let flat = flatten_availability(&[a], Some(&window));

    assert_eq!(flat.len(), 2);
    assert_eq!(
        flat[1],
        interval(2026, 3, 2, 22, 0, 23, 30),
        "partially-overlapping slot must not be clipped to the window"
    );
}

#[test]
fn no_window_keeps_everything() {
    let a = record(
        "alice",
        vec![
            interval(2026, 3, 2, 9, 0, 10, 0),
            interval(2027, 1, 1, 9, 0, 10, 0),
        ],
    );

    assert_eq!(flatten_availability(&[a], None).len(), 2);
}

#[test]
fn slots_with_equal_start_sorted_by_end() {
    let a = record(
        "alice",
        vec![
            interval(2026, 3, 2, 9, 0, 12, 0),
            interval(2026, 3, 2, 9, 0, 10, 0),
        ],
    );

    let flat = flatten_availability(&[a], None);

    assert_eq!(flat[0], interval(2026, 3, 2, 9, 0, 10, 0));
    assert_eq!(flat[1], interval(2026, 3, 2, 9, 0, 12, 0));
}
