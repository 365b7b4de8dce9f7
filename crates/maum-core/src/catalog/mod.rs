//! Emotion catalog module.
//!
//! A read-only lookup table of ten emotion categories, each with trigger
//! keywords, candidate replies, and a display color.
//!
//! # Module Structure
//!
//! - `model`: catalog domain model (`EmotionCategory`, `EmotionProfile`)
//! - `preset`: the built-in catalog data and lookup helpers

mod model;
mod preset;

// Re-export public API
pub use model::{EmotionCategory, EmotionProfile};
pub use preset::{emotion_profiles, profile_for};
