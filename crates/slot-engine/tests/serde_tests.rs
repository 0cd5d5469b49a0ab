//! Wire-format tests for the public data types.
//!
//! The JSON shapes here are what store implementations and the CLI exchange;
//! keep them stable.

use chrono::{TimeZone, Utc};
use serde_json::json;
use slot_engine::types::{
    AvailabilityRecord, BookedInterview, InterviewStatus, RankedSlot, RecurrencePattern,
    TimeInterval,
};

#[test]
fn ranked_slot_serializes_flat() {
    let slot = RankedSlot {
        interval: TimeInterval {
            start: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).unwrap(),
        },
        score: 135,
    };

    let value = serde_json::to_value(&slot).unwrap();

    // start/end live at the top level, not nested under "interval".
    assert_eq!(
        value,
        json!({
            "start": "2026-03-02T10:00:00Z",
            "end": "2026-03-02T11:00:00Z",
            "score": 135,
        })
    );
}

#[test]
fn interview_status_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_value(InterviewStatus::Proposed).unwrap(),
        json!("proposed")
    );
    let status: InterviewStatus = serde_json::from_value(json!("rescheduled")).unwrap();
    assert_eq!(status, InterviewStatus::Rescheduled);
}

#[test]
fn recurrence_pattern_uses_lowercase_names() {
    let pattern: RecurrencePattern = serde_json::from_value(json!("biweekly")).unwrap();
    assert_eq!(pattern, RecurrencePattern::Biweekly);
}

#[test]
fn availability_record_optional_fields_may_be_omitted() {
    let record: AvailabilityRecord = serde_json::from_value(json!({
        "user_id": "alice",
        "slots": [
            { "start": "2026-03-02T09:00:00Z", "end": "2026-03-02T17:00:00Z" }
        ]
    }))
    .unwrap();

    assert_eq!(record.user_id, "alice");
    assert_eq!(record.slots.len(), 1);
    assert!(record.week_of.is_none());
    assert!(record.recurrence.is_none());
}

#[test]
fn booked_interview_round_trips() {
    let booking = BookedInterview {
        candidate_id: "cand-1".to_string(),
        interviewer_id: "ivr-1".to_string(),
        scheduled_time: TimeInterval {
            start: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).unwrap(),
        },
        status: InterviewStatus::Confirmed,
    };

    let json = serde_json::to_string(&booking).unwrap();
    let back: BookedInterview = serde_json::from_str(&json).unwrap();

    assert_eq!(back.scheduled_time, booking.scheduled_time);
    assert_eq!(back.status, InterviewStatus::Confirmed);
}
