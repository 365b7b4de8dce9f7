//! Emotion catalog domain model.
//!
//! Defines the fixed set of emotion categories the agent can recognize and
//! the static profile (trigger keywords, candidate replies, display color)
//! attached to each category.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The ten emotion categories the agent classifies input into.
///
/// Declaration order is catalog order: when a text contains keywords from
/// more than one category, the earliest declared category wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EmotionCategory {
    /// Sadness, grief, hurt.
    Sad,
    /// Joy, happiness, excitement.
    Joy,
    /// Anger, irritation, resentment.
    Angry,
    /// Anxiety, worry, tension.
    Anxiety,
    /// Loneliness, isolation.
    Lonely,
    /// Exhaustion, burnout.
    Tired,
    /// Regret over past mistakes.
    Regretful,
    /// Listlessness, lack of drive.
    Feckless,
    /// Anticipation, hope for what is ahead.
    Expectation,
    /// Confusion, inner conflict.
    Confused,
}

/// A single catalog entry: the static classification and reply data for
/// one emotion category.
#[derive(Debug, Clone, Serialize)]
pub struct EmotionProfile {
    /// The category this profile describes.
    pub category: EmotionCategory,
    /// Trigger keywords, matched as case-sensitive substrings, in priority order.
    pub keywords: &'static [&'static str],
    /// Candidate reply lines; one is chosen per matching turn.
    pub replies: &'static [&'static str],
    /// Display color for report rendering (`#rrggbb`).
    pub color: &'static str,
}

impl EmotionProfile {
    /// Creates a new catalog entry.
    pub const fn new(
        category: EmotionCategory,
        keywords: &'static [&'static str],
        replies: &'static [&'static str],
        color: &'static str,
    ) -> Self {
        Self {
            category,
            keywords,
            replies,
            color,
        }
    }
}
