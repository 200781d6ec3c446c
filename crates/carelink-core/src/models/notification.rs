//! Notification model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{parse_timestamp, Priority};

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Appointment,
    Medication,
    Health,
    System,
    Warning,
    #[default]
    Info,
}

/// A user-facing notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub notification_type: NotificationType,
    #[serde(default)]
    pub priority: Priority,
    /// Delivery time, RFC 3339
    pub timestamp: String,
    #[serde(default)]
    pub is_read: bool,
    /// Client-only flag; never sent to or read from the backend.
    #[serde(skip)]
    pub is_starred: bool,
}

impl Notification {
    /// Parse the delivery time; `None` if malformed.
    pub fn delivered_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }
}
