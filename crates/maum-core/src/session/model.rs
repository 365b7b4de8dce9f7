//! Session domain model.
//!
//! This module contains the mutable per-session record that the response
//! engine and the session controller operate on.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::message::{ChatMessage, Speaker};
use super::mode::SessionMode;
use crate::catalog::EmotionCategory;

/// Mutable per-session record.
///
/// A session contains:
/// - The emotion tally, holding one entry per category (zero-initialized,
///   a key is never missing)
/// - The conversation log, append-only within a session
/// - The current session mode
///
/// State is owned exclusively by the current session and lives only for
/// the current process; there is no persistence across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Occurrences of each emotion category observed this session.
    pub emotion_count: HashMap<EmotionCategory, u32>,
    /// Ordered conversation history.
    pub conversation_log: Vec<ChatMessage>,
    /// Current session mode.
    pub mode: SessionMode,
}

impl SessionState {
    /// Creates a fresh session: all counts zero, empty log, `Chatting`.
    pub fn new() -> Self {
        Self {
            emotion_count: EmotionCategory::iter().map(|category| (category, 0)).collect(),
            conversation_log: Vec::new(),
            mode: SessionMode::Chatting,
        }
    }

    /// Returns the session to its initial state.
    ///
    /// Idempotent: resetting twice is the same as resetting once.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Increments the tally for `category` by one.
    pub fn increment(&mut self, category: EmotionCategory) {
        *self.emotion_count.entry(category).or_insert(0) += 1;
    }

    /// Total number of classified turns this session.
    pub fn total_count(&self) -> u32 {
        self.emotion_count.values().sum()
    }

    /// Appends a message to the conversation log.
    pub fn append(&mut self, speaker: Speaker, content: impl Into<String>) {
        self.conversation_log.push(ChatMessage::new(speaker, content));
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
