//! Chat endpoints: conversation summaries, message history, read state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde_json::json;

use super::http::{self, ApiError, RequestDescriptor};
use super::types::{ChatMessage, ChatSession};

/// List the authenticated account's conversations, most recent first.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn sessions() -> Result<Vec<ChatSession>, ApiError> {
    http::send(RequestDescriptor::get("/chat/getChatSession")).await
}

/// Fetch the message history with another account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn messages(other_id: i64) -> Result<Vec<ChatMessage>, ApiError> {
    http::send(RequestDescriptor::get("/chat/getMessages").query("otherID", other_id)).await
}

/// Mark the conversation with another account as read.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn read_messages(other_id: i64) -> Result<(), ApiError> {
    http::send_unit(read_messages_request(other_id)).await
}

fn read_messages_request(other_id: i64) -> RequestDescriptor {
    RequestDescriptor::post("/chat/readMessages").json(json!({"otherID": other_id}))
}

/// Count unread messages from another account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn unread_count(other_id: i64) -> Result<i64, ApiError> {
    http::send(RequestDescriptor::get("/chat/getUnreadMessageCount").query("otherID", other_id))
        .await
}
