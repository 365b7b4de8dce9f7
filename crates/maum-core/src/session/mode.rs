//! Session mode types for turn state management.

use serde::{Deserialize, Serialize};

/// Represents the current interaction mode within a session.
///
/// `Reporting` is entered only by a terminate input and left again by any
/// non-blank follow-up turn; the mode is recomputed per submitted turn
/// rather than held sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Normal chat: turns are classified and answered.
    Chatting,
    /// The last turn was a terminate command; the report view is shown.
    Reporting,
}

impl Default for SessionMode {
    fn default() -> Self {
        SessionMode::Chatting
    }
}
