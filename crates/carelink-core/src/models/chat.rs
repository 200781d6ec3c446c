//! Chat message model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// Kind of chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    File,
    Topic,
}

/// File descriptor attached to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single message in the assistant chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    /// Sent time, RFC 3339
    pub timestamp: String,
    pub is_from_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub message_type: MessageType,
}

impl ChatMessage {
    /// Parse the sent time; `None` if malformed.
    pub fn sent_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "id": "msg-1",
            "content": "How do I read my lab results?",
            "timestamp": "2025-03-10T10:00:00+00:00",
            "isFromUser": true
        }"#;

        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.message_type, MessageType::Text);
        assert!(!message.is_starred);
        assert!(message.attachment.is_none());
        assert!(message.sent_time().is_some());
    }

    #[test]
    fn test_attachment_wire_names() {
        let attachment = Attachment {
            name: "scan.pdf".into(),
            size_bytes: Some(120_000),
            mime_type: Some("application/pdf".into()),
            url: None,
            description: None,
        };
        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["sizeBytes"], 120_000);
        assert_eq!(json["mimeType"], "application/pdf");
    }
}
