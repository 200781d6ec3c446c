//! Appointment conflict detection.
//!
//! Intervals are half-open `[start, end)`: two appointments conflict when
//! their intervals genuinely overlap, and touching edges do not count. A
//! candidate that starts exactly when an existing appointment ends, or ends
//! exactly when one starts, is NOT a conflict.

use chrono::{DateTime, Duration, FixedOffset};

use crate::models::Appointment;

/// Whether a candidate slot (`start`, `duration_minutes`) overlaps any
/// existing appointment on the candidate's calendar day.
///
/// Only same-day appointments are considered (calendar day taken in the
/// candidate's offset); an existing appointment without a duration is
/// assumed to run the default 60 minutes. Records with malformed timestamps
/// never conflict.
pub fn has_conflict(
    existing: &[Appointment],
    candidate_start: DateTime<FixedOffset>,
    duration_minutes: u32,
) -> bool {
    let candidate_end = candidate_start + Duration::minutes(i64::from(duration_minutes));
    let candidate_day = candidate_start.date_naive();
    let offset = candidate_start.timezone();

    existing.iter().any(|appointment| {
        let Some(start) = appointment.scheduled_time() else {
            return false;
        };
        if start.with_timezone(&offset).date_naive() != candidate_day {
            return false;
        }
        let end = start + appointment.duration();
        candidate_start < end && candidate_end > start
    })
}
