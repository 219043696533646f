//! Chat record types.
//!
//! A `ChatRecord` is one persisted exchange: the user's message, the
//! model's reply, the owning user identifier, and the insertion time.
//! Records are append-only; nothing in the relay updates or deletes them.

use chrono::{DateTime, Utc};

/// User identifier stored when a chat request does not name one.
pub const DEFAULT_USER_ID: &str = "anonymous";

/// A stored exchange between a user and the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRecord {
    /// Auto-assigned, monotonically increasing identity.
    pub id: i64,
    pub user_id: String,
    /// The user's input.
    pub message: String,
    /// The generated reply.
    pub response: String,
    /// Server clock at insertion.
    pub timestamp: DateTime<Utc>,
}

/// Insert shape for a chat record. The store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatRecord {
    pub user_id: String,
    pub message: String,
    pub response: String,
}

impl NewChatRecord {
    pub fn new(
        user_id: impl Into<String>,
        message: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            response: response.into(),
        }
    }
}
