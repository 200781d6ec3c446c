//! Appointment model.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{parse_timestamp, Priority};

/// Assumed length of an appointment whose duration is unspecified.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

/// A scheduled appointment between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique appointment ID
    pub id: String,
    /// Patient reference
    pub patient_id: String,
    /// Doctor reference
    pub doctor_id: String,
    /// Doctor display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    /// Scheduled start, RFC 3339
    pub scheduled_at: String,
    /// Duration in minutes; [`DEFAULT_DURATION_MINUTES`] when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Lifecycle status
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Priority label
    #[serde(default)]
    pub priority: Priority,
    /// Free-form appointment type (e.g. "checkup", "follow-up")
    #[serde(rename = "type", default)]
    pub appointment_type: String,
    /// Recurrence flag. Dead schema: nothing expands recurring
    /// appointments into concrete instances.
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_end_date: Option<String>,
    /// Reminder flag
    #[serde(default)]
    pub reminder_enabled: bool,
    /// Reminder lead time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_minutes_before: Option<u32>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Validation failures for a candidate appointment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("scheduled time is not a valid RFC 3339 timestamp: {0:?}")]
    BadTimestamp(String),

    #[error("scheduled time must be in the future")]
    NotInFuture,

    #[error("duration must be greater than zero")]
    ZeroDuration,
}

impl Appointment {
    /// Parse the scheduled start time; `None` if malformed.
    pub fn scheduled_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.scheduled_at)
    }

    /// Duration in minutes, defaulted when unspecified.
    pub fn duration_minutes_or_default(&self) -> u32 {
        self.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    /// Duration as a time delta.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes_or_default()))
    }

    /// Scheduled end time (start + duration); `None` if the start is malformed.
    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        self.scheduled_time().map(|start| start + self.duration())
    }

    /// Check the creation-time invariants: a parseable start in the future
    /// and a non-zero duration.
    pub fn validate(&self, now: DateTime<FixedOffset>) -> Result<(), ValidationError> {
        let start = self
            .scheduled_time()
            .ok_or_else(|| ValidationError::BadTimestamp(self.scheduled_at.clone()))?;
        if start < now {
            return Err(ValidationError::NotInFuture);
        }
        if self.duration_minutes == Some(0) {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(())
    }
}
