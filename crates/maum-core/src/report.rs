//! Emotion distribution report.
//!
//! Computes the percentage distribution handed to the report renderer.
//! Rendering itself (bars, layout, styling) belongs to the presentation
//! layer.

use std::collections::HashMap;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::catalog::{EmotionCategory, profile_for};

/// One row of the emotion report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// The emotion category.
    pub category: EmotionCategory,
    /// Share of this category among all classified turns, in percent.
    pub percentage: f64,
    /// Display color from the catalog (`#rrggbb`).
    pub color: &'static str,
}

/// Computes the percentage distribution of observed emotions.
///
/// Only categories with a non-zero count appear. Entries are sorted by
/// percentage, descending; ties keep catalog order. Returns an empty
/// vector when no emotion was counted.
pub fn distribution(emotion_count: &HashMap<EmotionCategory, u32>) -> Vec<ReportEntry> {
    let total: u32 = emotion_count.values().sum();
    if total == 0 {
        return Vec::new();
    }

    // Map iteration order is arbitrary; build the sequence in catalog order
    // so the stable sort leaves ties in catalog order.
    let mut entries: Vec<ReportEntry> = EmotionCategory::iter()
        .filter_map(|category| {
            let count = emotion_count.get(&category).copied().unwrap_or(0);
            (count > 0).then(|| ReportEntry {
                category,
                percentage: f64::from(count) / f64::from(total) * 100.0,
                color: profile_for(category).color,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    entries
}
