//! Accessor traits that plug the four entity types into the pipeline.

use chrono::{DateTime, FixedOffset};

use crate::models::{Appointment, ChatMessage, LogEvent, Notification};

/// Entities with a primary timestamp.
pub trait Timestamped {
    /// The parsed timestamp; `None` when the wire value is malformed.
    fn timestamp(&self) -> Option<DateTime<FixedOffset>>;
}

/// Entities with a sortable priority label.
pub trait Prioritized {
    /// Rank per the shared priority scale (unrecognized labels rank 0).
    fn priority_rank(&self) -> u8;
}

/// Entities with free-text fields that substring search applies to.
pub trait Searchable {
    /// Visit each searchable text field.
    fn for_each_field(&self, visit: &mut dyn FnMut(&str));
}

/// Entities with starred/read flags.
pub trait Flagged {
    fn is_starred(&self) -> bool;
    fn is_read(&self) -> bool;
}

impl Timestamped for Appointment {
    fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.scheduled_time()
    }
}

impl Prioritized for Appointment {
    fn priority_rank(&self) -> u8 {
        self.priority.rank()
    }
}

impl Searchable for Appointment {
    fn for_each_field(&self, visit: &mut dyn FnMut(&str)) {
        visit(&self.appointment_type);
        if let Some(doctor_name) = &self.doctor_name {
            visit(doctor_name);
        }
        if let Some(notes) = &self.notes {
            visit(notes);
        }
    }
}

impl Timestamped for ChatMessage {
    fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.sent_time()
    }
}

impl Searchable for ChatMessage {
    fn for_each_field(&self, visit: &mut dyn FnMut(&str)) {
        visit(&self.content);
        if let Some(attachment) = &self.attachment {
            visit(&attachment.name);
            if let Some(description) = &attachment.description {
                visit(description);
            }
        }
    }
}

impl Flagged for ChatMessage {
    fn is_starred(&self) -> bool {
        self.is_starred
    }

    fn is_read(&self) -> bool {
        self.is_read
    }
}

impl Timestamped for Notification {
    fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.delivered_time()
    }
}

impl Prioritized for Notification {
    fn priority_rank(&self) -> u8 {
        self.priority.rank()
    }
}

impl Searchable for Notification {
    fn for_each_field(&self, visit: &mut dyn FnMut(&str)) {
        visit(&self.title);
        visit(&self.content);
    }
}

impl Flagged for Notification {
    fn is_starred(&self) -> bool {
        self.is_starred
    }

    fn is_read(&self) -> bool {
        self.is_read
    }
}

impl Timestamped for LogEvent {
    fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.event_time()
    }
}

impl Searchable for LogEvent {
    fn for_each_field(&self, visit: &mut dyn FnMut(&str)) {
        visit(&self.message);
        if let Some(details) = &self.details {
            if let Ok(json) = serde_json::to_string(details) {
                visit(&json);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationType, Priority};
    use crate::pipeline::Pipeline;

    fn notification_with_priority(id: &str, priority: Priority) -> Notification {
        Notification {
            id: id.into(),
            title: String::new(),
            content: String::new(),
            notification_type: NotificationType::Info,
            priority,
            timestamp: "2025-03-10T10:00:00+00:00".into(),
            is_read: false,
            is_starred: false,
        }
    }

    #[test]
    fn test_priority_sort_puts_unrecognized_last() {
        let input = vec![
            notification_with_priority("low", Priority::Low),
            notification_with_priority("urgent", Priority::Urgent),
            notification_with_priority("odd", Priority::Other("medium-unrecognized-value".into())),
            notification_with_priority("high", Priority::High),
        ];

        let ordered = Pipeline::new(&input).by_priority().collect();
        let ids: Vec<&str> = ordered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["urgent", "high", "low", "odd"]);
    }

    #[test]
    fn test_log_search_covers_details() {
        let event = LogEvent {
            id: "log-1".into(),
            level: crate::models::LogLevel::Info,
            message: "request finished".into(),
            timestamp: "2025-03-10T10:00:00+00:00".into(),
            user_id: None,
            details: Some(serde_json::json!({ "endpoint": "/api/records/all" })),
        };
        let input = vec![event];

        assert_eq!(Pipeline::new(&input).search("records").len(), 1);
        assert_eq!(Pipeline::new(&input).search("REQUEST").len(), 1);
        assert!(Pipeline::new(&input).search("missing").is_empty());
    }

    #[test]
    fn test_unread_only_and_starred_only() {
        let mut read = notification_with_priority("read", Priority::Low);
        read.is_read = true;
        let mut starred = notification_with_priority("starred", Priority::Low);
        starred.is_starred = true;
        let input = vec![read, starred];

        let unread = Pipeline::new(&input).unread_only().collect();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, "starred");

        let starred = Pipeline::new(&input).starred_only().collect();
        assert_eq!(starred.len(), 1);
        assert_eq!(starred[0].id, "starred");
    }
}
