//! System log event model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    #[default]
    Info,
    Success,
    Debug,
}

/// A system log event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub id: String,
    #[serde(default)]
    pub level: LogLevel,
    pub message: String,
    /// Event time, RFC 3339
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Structured details, shape defined by the emitter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEvent {
    /// Parse the event time; `None` if malformed.
    pub fn event_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }
}
