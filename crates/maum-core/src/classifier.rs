//! Keyword-based emotion classification.

use crate::catalog::{EmotionCategory, emotion_profiles};

/// The result of a successful classification: the matched category and the
/// keyword that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// The matched emotion category.
    pub category: EmotionCategory,
    /// The keyword found in the input text.
    pub keyword: &'static str,
}

/// Classifies `text` against the emotion catalog.
///
/// Categories are scanned in catalog order and keywords in list order; the
/// first keyword that appears in `text` as a case-sensitive substring wins.
/// Returns `None` when no keyword matches, including for empty input.
///
/// Pure function, O(categories × keywords) per call.
pub fn classify(text: &str) -> Option<KeywordMatch> {
    for profile in emotion_profiles() {
        for &keyword in profile.keywords {
            if text.contains(keyword) {
                return Some(KeywordMatch {
                    category: profile.category,
                    keyword,
                });
            }
        }
    }
    None
}
