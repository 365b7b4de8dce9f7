//! Conversation message types.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Represents the speaker of a message in the conversation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// Message from the user.
    User,
    /// Message from the agent.
    Agent,
}

/// A single message in the session's conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who said it.
    pub speaker: Speaker,
    /// The message text.
    pub content: String,
    /// Timestamp when the message was appended (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
