//! System logs service facade.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;

use carelink_core::models::{LogEvent, LogLevel};
use carelink_core::pipeline::Pipeline;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Body for a new log entry; the backend assigns the ID.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewLogEvent<'a> {
    level: LogLevel,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a serde_json::Value>,
    timestamp: String,
}

/// Log operations for one API client.
pub struct LogsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LogsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every log event the backend holds.
    pub async fn list_all(&self) -> ApiResult<Vec<LogEvent>> {
        self.client.get_json("/api/logs/all").await
    }

    /// Log events attributed to one user.
    pub async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<LogEvent>> {
        self.client
            .get_json(&format!("/api/logs/user?x={user_id}"))
            .await
    }

    /// Append a log entry.
    pub async fn append(
        &self,
        level: LogLevel,
        message: &str,
        user_id: Option<&str>,
        details: Option<&serde_json::Value>,
    ) -> ApiResult<LogEvent> {
        let body = NewLogEvent {
            level,
            message,
            user_id,
            details,
            timestamp: Utc::now().to_rfc3339(),
        };
        self.client.post_json("/api/logs/create", &body).await
    }

    /// Events of one severity.
    pub async fn by_level(&self, level: LogLevel) -> ApiResult<Vec<LogEvent>> {
        let all = self.list_all().await?;
        Ok(Pipeline::new(&all)
            .retain(|event| event.level == level)
            .cloned())
    }

    /// Events within an inclusive instant range.
    pub async fn in_range(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<LogEvent>> {
        let all = self.list_all().await?;
        Ok(Pipeline::new(&all).between(start, end).cloned())
    }

    /// Events from the last `hours` hours, newest first.
    pub async fn recent(
        &self,
        hours: u32,
        now: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<LogEvent>> {
        let cutoff = now - Duration::hours(i64::from(hours));
        let all = self.list_all().await?;
        Ok(Pipeline::new(&all).since(cutoff).newest_first().cloned())
    }

    /// Case-insensitive substring search over message and serialized
    /// details.
    pub async fn search(&self, term: &str) -> ApiResult<Vec<LogEvent>> {
        let all = self.list_all().await?;
        Ok(Pipeline::new(&all).search(term).cloned())
    }
}
