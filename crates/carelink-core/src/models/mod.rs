//! Domain models for the CareLink client.
//!
//! All entities are plain records fetched in bulk from the backend and held
//! in view state. Wire field names are camelCase to match the backend JSON.
//! Timestamps travel as RFC 3339 strings and are parsed lazily, so one
//! malformed record never aborts a computation over the rest.

mod appointment;
mod chat;
mod log_event;
mod notification;
mod priority;

pub use appointment::*;
pub use chat::*;
pub use log_event::*;
pub use notification::*;
pub use priority::*;

use chrono::{DateTime, FixedOffset};

/// Parse an RFC 3339 timestamp, returning `None` on malformed input.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}
