//! Assistant chat service facade.

use chrono::Utc;
use uuid::Uuid;

use carelink_core::models::{ChatMessage, MessageType};
use carelink_core::pipeline::Pipeline;

use crate::client::ApiClient;
use crate::error::{not_found_as_empty, ApiResult};

/// Chat operations for one API client.
pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All chat messages for a user.
    pub async fn list(&self, user_id: &str) -> ApiResult<Vec<ChatMessage>> {
        self.client
            .get_json(&format!("/api/chat/all?x={user_id}"))
            .await
    }

    /// Send a user message. The ID and timestamp are assigned client-side.
    pub async fn send(
        &self,
        user_id: &str,
        content: impl Into<String>,
        message_type: MessageType,
    ) -> ApiResult<ChatMessage> {
        let message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
            is_from_user: true,
            attachment: None,
            is_starred: false,
            is_read: true,
            message_type,
        };
        self.client
            .post_json(&format!("/api/chat/send?x={user_id}"), &message)
            .await
    }

    /// Mark a message as read.
    pub async fn mark_read(&self, message_id: &str) -> ApiResult<()> {
        self.client
            .put_body(
                &format!("/api/chat/update-status/{message_id}"),
                &serde_json::json!({ "status": "read" }),
            )
            .await
    }

    /// Delete a message.
    pub async fn delete(&self, message_id: &str, user_id: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("/api/chat/delete/{message_id}?userId={user_id}"))
            .await
    }

    /// The most recent messages, newest first, at most `limit`.
    pub async fn recent(&self, user_id: &str, limit: usize) -> ApiResult<Vec<ChatMessage>> {
        let all = self.list(user_id).await?;
        let mut ordered = Pipeline::new(&all).newest_first().cloned();
        ordered.truncate(limit);
        Ok(ordered)
    }

    /// Messages of one kind.
    pub async fn by_type(
        &self,
        user_id: &str,
        message_type: MessageType,
    ) -> ApiResult<Vec<ChatMessage>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all)
            .retain(|message| message.message_type == message_type)
            .cloned())
    }

    /// Starred messages only.
    pub async fn starred(&self, user_id: &str) -> ApiResult<Vec<ChatMessage>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).starred_only().cloned())
    }

    /// Unread assistant messages, for the chat badge. The user's own
    /// messages never count; a missing collection counts as zero.
    pub async fn unread_count(&self, user_id: &str) -> ApiResult<usize> {
        let all = not_found_as_empty(self.list(user_id).await)?;
        Ok(Pipeline::new(&all)
            .unread_only()
            .retain(|message| !message.is_from_user)
            .len())
    }

    /// Mark every unread assistant message as read.
    pub async fn mark_all_read(&self, user_id: &str) -> ApiResult<()> {
        let all = self.list(user_id).await?;
        let unread = Pipeline::new(&all)
            .unread_only()
            .retain(|message| !message.is_from_user)
            .collect();
        for message in unread {
            self.mark_read(&message.id).await?;
        }
        Ok(())
    }

    /// Case-insensitive substring search over message content and
    /// attachment descriptions.
    pub async fn search(&self, user_id: &str, term: &str) -> ApiResult<Vec<ChatMessage>> {
        let all = self.list(user_id).await?;
        Ok(Pipeline::new(&all).search(term).cloned())
    }
}
