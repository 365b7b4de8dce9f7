//! Turn-taking state machine.
//!
//! `SessionController` is the single entry point the presentation layer
//! drives: one `process_turn` call per submitted input, one `view` call for
//! the render payload, and `reset` as the no-argument reset trigger.

use super::message::{ChatMessage, Speaker};
use super::mode::SessionMode;
use super::model::SessionState;
use crate::config::SessionConfig;
use crate::report::{self, ReportEntry};
use crate::response::ResponseEngine;

/// What a single submitted turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank submission: nothing changed, not even the mode.
    Ignored,
    /// Normal chat turn; carries the agent reply that was appended.
    Replied(String),
    /// The terminate keyword was seen; the session is now in report mode.
    ReportRequested,
}

/// Render payload handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    /// Chat mode: the conversation log, most recent first.
    Chat(Vec<ChatMessage>),
    /// Report mode with at least one observed emotion.
    Report(Vec<ReportEntry>),
    /// Report mode with no emotion data to report.
    EmptyReport,
}

/// Orchestrates turn-taking over an exclusively owned [`SessionState`].
pub struct SessionController {
    state: SessionState,
    engine: ResponseEngine,
    terminate_keyword: String,
}

impl SessionController {
    /// Creates a controller with the default response engine.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_engine(config, ResponseEngine::new())
    }

    /// Creates a controller with a custom response engine.
    pub fn with_engine(config: SessionConfig, engine: ResponseEngine) -> Self {
        Self {
            state: SessionState::new(),
            engine,
            terminate_keyword: config.terminate_keyword,
        }
    }

    /// Read access to the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The configured terminate keyword.
    pub fn terminate_keyword(&self) -> &str {
        &self.terminate_keyword
    }

    /// Processes one submitted turn.
    ///
    /// Blank input (after trimming) is a no-op: no mutation at all, the
    /// mode keeps whatever value it had. A turn containing the terminate
    /// keyword switches to `Reporting` without classifying or logging.
    /// Any other turn returns the session to `Chatting`, obtains a reply
    /// from the response engine, and appends the user text and the agent
    /// reply to the conversation log, in that order.
    pub fn process_turn(&mut self, raw: &str) -> TurnOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return TurnOutcome::Ignored;
        }

        if text.contains(self.terminate_keyword.as_str()) {
            self.state.mode = SessionMode::Reporting;
            tracing::debug!("terminate keyword received, entering report mode");
            return TurnOutcome::ReportRequested;
        }

        self.state.mode = SessionMode::Chatting;
        let reply = self.engine.respond(&mut self.state, text);
        self.state.append(Speaker::User, text);
        self.state.append(Speaker::Agent, reply.clone());
        TurnOutcome::Replied(reply)
    }

    /// Builds the render payload for the current state.
    ///
    /// In `Chatting` this is the conversation log, most recent first. In
    /// `Reporting` it is the sorted distribution, or the empty signal when
    /// no emotion has been observed.
    pub fn view(&self) -> SessionView {
        match self.state.mode {
            SessionMode::Chatting => {
                let mut messages = self.state.conversation_log.clone();
                messages.reverse();
                SessionView::Chat(messages)
            }
            SessionMode::Reporting => {
                if self.state.total_count() == 0 {
                    SessionView::EmptyReport
                } else {
                    SessionView::Report(report::distribution(&self.state.emotion_count))
                }
            }
        }
    }

    /// Reset trigger: clears all session data and returns to `Chatting`.
    pub fn reset(&mut self) {
        self.state.reset();
        tracing::debug!("session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmotionCategory;
    use crate::response::{FALLBACK_REPLY, ReplySelector};

    struct FirstReplySelector;

    impl ReplySelector for FirstReplySelector {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn controller() -> SessionController {
        SessionController::with_engine(
            SessionConfig::default(),
            ResponseEngine::with_selector(Box::new(FirstReplySelector)),
        )
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut controller = controller();

        assert_eq!(controller.process_turn("   "), TurnOutcome::Ignored);

        assert_eq!(controller.state().total_count(), 0);
        assert!(controller.state().conversation_log.is_empty());
        assert_eq!(controller.state().mode, SessionMode::Chatting);
    }

    #[test]
    fn test_blank_input_does_not_leave_report_mode() {
        let mut controller = controller();
        controller.process_turn("기뻐!");
        controller.process_turn("종료");
        assert_eq!(controller.state().mode, SessionMode::Reporting);

        assert_eq!(controller.process_turn(""), TurnOutcome::Ignored);

        assert_eq!(controller.state().mode, SessionMode::Reporting);
    }

    #[test]
    fn test_chat_turn_appends_user_then_agent() {
        let mut controller = controller();

        let outcome = controller.process_turn("오늘 너무 슬퍼");

        let TurnOutcome::Replied(reply) = outcome else {
            panic!("expected a reply");
        };
        let log = &controller.state().conversation_log;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].speaker, Speaker::User);
        assert_eq!(log[0].content, "오늘 너무 슬퍼");
        assert_eq!(log[1].speaker, Speaker::Agent);
        assert_eq!(log[1].content, reply);
    }

    #[test]
    fn test_unmatched_turn_gets_fallback_and_is_logged() {
        let mut controller = controller();

        let outcome = controller.process_turn("밥 먹었어");

        assert_eq!(outcome, TurnOutcome::Replied(FALLBACK_REPLY.to_string()));
        assert_eq!(controller.state().total_count(), 0);
        assert_eq!(controller.state().conversation_log.len(), 2);
    }

    #[test]
    fn test_terminate_turn_enters_report_mode_without_logging() {
        let mut controller = controller();
        controller.process_turn("기뻐!");

        let outcome = controller.process_turn("종료");

        assert_eq!(outcome, TurnOutcome::ReportRequested);
        assert_eq!(controller.state().mode, SessionMode::Reporting);
        // The terminate turn itself is neither classified nor logged.
        assert_eq!(controller.state().conversation_log.len(), 2);
        assert_eq!(controller.state().total_count(), 1);
    }

    #[test]
    fn test_terminate_turn_is_not_classified() {
        let mut controller = controller();

        // Contains a SAD keyword, but the terminate check runs first.
        let outcome = controller.process_turn("슬퍼 종료");

        assert_eq!(outcome, TurnOutcome::ReportRequested);
        assert_eq!(controller.state().total_count(), 0);
        assert!(controller.state().conversation_log.is_empty());
    }

    #[test]
    fn test_terminate_keyword_matches_as_substring() {
        let mut controller = controller();

        let outcome = controller.process_turn("이제 종료할게");

        assert_eq!(outcome, TurnOutcome::ReportRequested);
    }

    #[test]
    fn test_report_mode_is_not_sticky() {
        let mut controller = controller();
        controller.process_turn("기뻐!");
        controller.process_turn("종료");

        let outcome = controller.process_turn("짜증나");

        assert!(matches!(outcome, TurnOutcome::Replied(_)));
        assert_eq!(controller.state().mode, SessionMode::Chatting);
        assert_eq!(controller.state().conversation_log.len(), 4);
        assert_eq!(
            controller.state().emotion_count[&EmotionCategory::Angry],
            1
        );
    }

    #[test]
    fn test_chat_view_is_most_recent_first() {
        let mut controller = controller();
        controller.process_turn("기뻐!");
        controller.process_turn("짜증나");

        let SessionView::Chat(messages) = controller.view() else {
            panic!("expected chat view");
        };
        assert_eq!(messages.len(), 4);
        // Latest agent reply first, first user message last.
        assert_eq!(messages[0].speaker, Speaker::Agent);
        assert_eq!(messages[3].speaker, Speaker::User);
        assert_eq!(messages[3].content, "기뻐!");
    }

    #[test]
    fn test_report_view_with_no_data_is_empty_signal() {
        let mut controller = controller();
        controller.process_turn("종료");

        assert_eq!(controller.view(), SessionView::EmptyReport);
    }

    #[test]
    fn test_custom_terminate_keyword() {
        let config = SessionConfig {
            terminate_keyword: "끝".to_string(),
        };
        let mut controller = SessionController::new(config);

        assert_eq!(controller.process_turn("끝"), TurnOutcome::ReportRequested);
        // The default keyword is just another chat turn now.
        assert!(matches!(
            controller.process_turn("종료"),
            TurnOutcome::Replied(_)
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut controller = controller();
        controller.process_turn("기뻐!");
        controller.process_turn("종료");

        controller.reset();

        assert_eq!(controller.state().total_count(), 0);
        assert!(controller.state().conversation_log.is_empty());
        assert_eq!(controller.state().mode, SessionMode::Chatting);
    }
}
