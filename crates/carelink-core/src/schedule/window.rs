//! Time-window classification for appointments.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};

use crate::models::{Appointment, AppointmentStatus};
use crate::pipeline::Pipeline;

/// Date range selectable in the schedule views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// The reference instant's calendar day.
    Today,
    /// Sunday through Saturday of the reference instant's week.
    Week,
    /// First through last day of the reference instant's month.
    Month,
    /// No date restriction.
    All,
}

/// Appointments bucketed relative to a reference instant.
///
/// Buckets are not disjoint: a confirmed appointment later today appears in
/// both `today` and `upcoming`, matching the independent view computations.
#[derive(Debug, Default)]
pub struct SchedulePartition<'a> {
    /// Start strictly before the reference instant, any status.
    pub past: Vec<&'a Appointment>,
    /// Same calendar day as the reference instant, any status.
    pub today: Vec<&'a Appointment>,
    /// Start at or after the reference instant and not cancelled.
    pub upcoming: Vec<&'a Appointment>,
}

/// Inclusive calendar-day bounds for a window, in the reference instant's
/// offset. `All` has no bounds.
pub fn window_bounds(
    window: TimeWindow,
    now: DateTime<FixedOffset>,
) -> Option<(NaiveDate, NaiveDate)> {
    let today = now.date_naive();
    match window {
        TimeWindow::Today => Some((today, today)),
        TimeWindow::Week => {
            let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
            Some((start, start + Duration::days(6)))
        }
        TimeWindow::Month => {
            let start = today.with_day(1)?;
            let next_month = if today.month() == 12 {
                NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
            }?;
            Some((start, next_month.pred_opt()?))
        }
        TimeWindow::All => None,
    }
}

/// Appointments whose calendar day falls inside the window, in input order.
/// Malformed timestamps are excluded from every bounded window.
pub fn in_window<'a>(
    appointments: &'a [Appointment],
    window: TimeWindow,
    now: DateTime<FixedOffset>,
) -> Vec<&'a Appointment> {
    match window_bounds(window, now) {
        None => appointments.iter().collect(),
        Some((start, end)) => appointments
            .iter()
            .filter(|appointment| {
                appointment
                    .scheduled_time()
                    .map(|t| {
                        let day = t.with_timezone(&now.timezone()).date_naive();
                        day >= start && day <= end
                    })
                    .unwrap_or(false)
            })
            .collect(),
    }
}

/// Whether an appointment counts as upcoming: start at or after `now` and
/// status not cancelled. There is no grace window, so a confirmed
/// appointment stops being upcoming the moment its start elapses.
pub fn is_upcoming(appointment: &Appointment, now: DateTime<FixedOffset>) -> bool {
    match appointment.scheduled_time() {
        Some(start) => start >= now && appointment.status != AppointmentStatus::Cancelled,
        None => false,
    }
}

/// Whether an appointment's start has elapsed, regardless of status.
pub fn is_past(appointment: &Appointment, now: DateTime<FixedOffset>) -> bool {
    matches!(appointment.scheduled_time(), Some(start) if start < now)
}

/// Bucket appointments into past/today/upcoming, preserving input order
/// within each bucket. Records with malformed timestamps land in no bucket.
pub fn partition<'a>(
    appointments: &'a [Appointment],
    now: DateTime<FixedOffset>,
) -> SchedulePartition<'a> {
    let today = now.date_naive();
    let mut buckets = SchedulePartition::default();

    for appointment in appointments {
        let Some(start) = appointment.scheduled_time() else {
            continue;
        };
        if start < now {
            buckets.past.push(appointment);
        }
        if is_upcoming(appointment, now) {
            buckets.upcoming.push(appointment);
        }
        if start.with_timezone(&now.timezone()).date_naive() == today {
            buckets.today.push(appointment);
        }
    }

    buckets
}

/// Number of upcoming appointments.
pub fn upcoming_count(appointments: &[Appointment], now: DateTime<FixedOffset>) -> usize {
    appointments
        .iter()
        .filter(|appointment| is_upcoming(appointment, now))
        .count()
}

/// The earliest upcoming appointment, if any.
pub fn next_appointment<'a>(
    appointments: &'a [Appointment],
    now: DateTime<FixedOffset>,
) -> Option<&'a Appointment> {
    appointments
        .iter()
        .filter(|appointment| is_upcoming(appointment, now))
        .min_by_key(|appointment| appointment.scheduled_time())
}

/// Appointments on a specific calendar date, in input order.
pub fn on_date<'a>(
    appointments: &'a [Appointment],
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<&'a Appointment> {
    Pipeline::new(appointments).on_day(date, offset).collect()
}

/// Appointments within `[start, end]` (inclusive instants), in input order.
pub fn in_range<'a>(
    appointments: &'a [Appointment],
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> Vec<&'a Appointment> {
    Pipeline::new(appointments).between(start, end).collect()
}
