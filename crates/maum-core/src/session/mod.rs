//! Session domain module.
//!
//! This module contains the session-related domain models and the
//! turn-taking state machine.
//!
//! # Module Structure
//!
//! - `message`: conversation log types (`Speaker`, `ChatMessage`)
//! - `mode`: session mode state (`SessionMode`)
//! - `model`: the mutable per-session record (`SessionState`)
//! - `controller`: the turn state machine (`SessionController`)

mod controller;
mod message;
mod mode;
mod model;

// Re-export public API
pub use controller::{SessionController, SessionView, TurnOutcome};
pub use message::{ChatMessage, Speaker};
pub use mode::SessionMode;
pub use model::SessionState;
