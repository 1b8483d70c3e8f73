//! Inbound text message in the core model.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// A single inbound text message with its sender and originating chat.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
