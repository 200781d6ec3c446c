//! Notifications service facade.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;

use carelink_core::models::{Notification, NotificationType, Priority};
use carelink_core::pipeline::Pipeline;

use crate::client::ApiClient;
use crate::error::{not_found_as_empty, ApiResult};

/// Body for a new notification; the backend assigns the ID.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewNotification<'a> {
    user_id: &'a str,
    title: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    notification_type: NotificationType,
    priority: &'a Priority,
    timestamp: String,
    is_read: bool,
}

/// Notification operations for one API client.
pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NotificationsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All notifications for a user.
    pub async fn list(&self, user_id: &str) -> ApiResult<Vec<Notification>> {
        self.client
            .get_json(&format!("/api/notifications/all?x={user_id}"))
            .await
    }

    /// Send a notification.
    pub async fn send(
        &self,
        user_id: &str,
        title: &str,
        content: &str,
        notification_type: NotificationType,
        priority: Priority,
    ) -> ApiResult<Notification> {
        let body = NewNotification {
            user_id,
            title,
            content,
            notification_type,
            priority: &priority,
            timestamp: Utc::now().to_rfc3339(),
            is_read: false,
        };
        self.client.post_json("/api/notifications/send", &body).await
    }

    /// Mark one notification as read.
    pub async fn mark_read(&self, notification_id: &str) -> ApiResult<()> {
        self.client
            .put_empty(&format!("/api/notifications/read/{notification_id}"))
            .await
    }

    /// Mark one notification as unread.
    pub async fn mark_unread(&self, notification_id: &str) -> ApiResult<()> {
        self.client
            .put_empty(&format!("/api/notifications/unread/{notification_id}"))
            .await
    }

    /// Delete one notification.
    pub async fn delete(&self, notification_id: &str, user_id: &str) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "/api/notifications/delete/{notification_id}?userId={user_id}"
            ))
            .await
    }

    /// Unread notifications, in delivery order.
    pub async fn unread(&self, user_id: &str) -> ApiResult<Vec<Notification>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).unread_only().cloned())
    }

    /// Unread badge count. A missing collection counts as zero; every other
    /// failure still surfaces.
    pub async fn unread_count(&self, user_id: &str) -> ApiResult<usize> {
        let all = not_found_as_empty(self.list(user_id).await)?;
        Ok(Pipeline::new(&all).unread_only().len())
    }

    /// Mark every unread notification as read, one request each.
    pub async fn mark_all_read(&self, user_id: &str) -> ApiResult<()> {
        for notification in self.unread(user_id).await? {
            self.mark_read(&notification.id).await?;
        }
        Ok(())
    }

    /// Notifications of one category.
    pub async fn by_type(
        &self,
        user_id: &str,
        notification_type: NotificationType,
    ) -> ApiResult<Vec<Notification>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all)
            .retain(|notification| notification.notification_type == notification_type)
            .cloned())
    }

    /// Notifications with an exact priority label.
    pub async fn by_priority(
        &self,
        user_id: &str,
        priority: Priority,
    ) -> ApiResult<Vec<Notification>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all)
            .retain(|notification| notification.priority == priority)
            .cloned())
    }

    /// Notifications delivered in the last `days` days, newest first.
    pub async fn recent(
        &self,
        user_id: &str,
        days: u32,
        now: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<Notification>> {
        let cutoff = now - Duration::days(i64::from(days));
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).since(cutoff).newest_first().cloned())
    }

    /// Case-insensitive substring search over title and content.
    pub async fn search(&self, user_id: &str, term: &str) -> ApiResult<Vec<Notification>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).search(term).cloned())
    }
}
