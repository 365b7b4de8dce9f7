//! Empathetic response generation.
//!
//! Wraps the classifier: a matching turn increments the session's tally for
//! the matched category and answers with one of the category's canned
//! replies; a non-matching turn gets the fixed fallback prompt.

use rand::Rng;

use crate::catalog::profile_for;
use crate::classifier;
use crate::session::SessionState;

/// Reply returned when no emotion keyword matches the input.
pub const FALLBACK_REPLY: &str = "그런 일이 있었구나. 조금 더 이야기해 줄래?";

/// Strategy for choosing one reply out of a category's candidate list.
///
/// Injected into [`ResponseEngine`] so tests can substitute a
/// deterministic implementation. Reply selection has no reproducibility
/// contract beyond this seam.
pub trait ReplySelector: Send {
    /// Picks an index in `0..len`. `len` is always at least 1.
    fn pick(&mut self, len: usize) -> usize;
}

/// Default selector: uniform choice from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomReplySelector;

impl ReplySelector for RandomReplySelector {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Generates agent replies and maintains the per-session emotion tally.
pub struct ResponseEngine {
    selector: Box<dyn ReplySelector>,
}

impl ResponseEngine {
    /// Creates an engine with the default random selector.
    pub fn new() -> Self {
        Self::with_selector(Box::new(RandomReplySelector))
    }

    /// Creates an engine with a custom reply selector.
    pub fn with_selector(selector: Box<dyn ReplySelector>) -> Self {
        Self { selector }
    }

    /// Produces the agent reply for `text`, updating `state` on a match.
    ///
    /// On a classifier match the matched category's count is incremented by
    /// one and a reply is chosen from that category's candidates. Without a
    /// match the counter is untouched and [`FALLBACK_REPLY`] is returned.
    /// Every input is answered, including the empty string; this cannot
    /// fail.
    pub fn respond(&mut self, state: &mut SessionState, text: &str) -> String {
        match classifier::classify(text) {
            Some(found) => {
                state.increment(found.category);
                let replies = profile_for(found.category).replies;
                let reply = replies[self.selector.pick(replies.len())];
                tracing::debug!(
                    category = %found.category,
                    keyword = %found.keyword,
                    "classified input"
                );
                reply.to_string()
            }
            None => {
                tracing::debug!("no emotion keyword matched, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new()
    }
}
