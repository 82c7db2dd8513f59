//! Parley test-support toolkit.
//!
//! This crate lets bot tests intercept outbound actions and assert on
//! them without equality boilerplate:
//!
//! - [`BusRecorder`] stands in for the connector bus and captures every
//!   action the bot emits, together with its emission delay
//! - [`RecordedAction`] wraps one captured action and exposes typed,
//!   per-connector projections plus assertion helpers
//!
//! # Quick start
//!
//! ```
//! use std::time::Duration;
//!
//! use parley_core::Action;
//! use parley_testkit::prelude::*;
//!
//! let recorder = BusRecorder::new();
//!
//! // The harness records each intercepted action.
//! recorder.record(Action::sentence("Hello"), Duration::from_millis(120));
//!
//! // The test asserts on what was sent.
//! let answer = recorder.first_answer().unwrap();
//! answer.assert_text("Hello");
//! assert!(answer.messenger().is_none());
//! ```
//!
//! # Asserting on rich payloads
//!
//! ```
//! use std::time::Duration;
//!
//! use parley_core::{Action, SendSentence};
//! use parley_teamchat::TeamChatMessage;
//! use parley_testkit::prelude::*;
//!
//! let card = TeamChatMessage::new("Build green").with_color("36A64F");
//! let sentence = SendSentence::new("Build green").with_message(&card).unwrap();
//!
//! let recorder = BusRecorder::new();
//! recorder.record(Action::SendSentence(sentence), Duration::ZERO);
//!
//! // The connector to compare against is implied by the expected value.
//! let answer = recorder.last_answer().unwrap();
//! answer.assert_message(&TeamChatMessage::new("Build green").with_color("36A64F"));
//! ```

pub mod record;
pub mod recorder;

pub use record::RecordedAction;
pub use recorder::BusRecorder;

/// Prelude module for convenient imports.
///
/// ```
/// use parley_testkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::record::RecordedAction;
    pub use crate::recorder::BusRecorder;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use parley_core::{Action, SendSentence};
    use parley_messenger::MessengerMessage;
    use parley_voice::VoiceResponse;

    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("parley_testkit=debug")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn integration_multi_connector_conversation() {
        init_tracing();
        let recorder = BusRecorder::new();

        let greeting = SendSentence::new("Welcome back")
            .with_message(&MessengerMessage::new("Welcome back").with_quick_reply("Menu", "MENU"))
            .and_then(|s| s.with_message(&VoiceResponse::new("Welcome back to the shop")))
            .unwrap();
        recorder.record(Action::SendSentence(greeting), Duration::from_millis(50));
        recorder.record(Action::sentence("What can I get you?"), Duration::from_millis(200));

        recorder.assert_answers_count(2);

        let first = recorder.first_answer().unwrap();
        first.assert_text("Welcome back");
        first.assert_message(
            &MessengerMessage::new("Welcome back").with_quick_reply("Menu", "MENU"),
        );
        first.assert_message(&VoiceResponse::new("Welcome back to the shop"));
        assert!(first.teamchat().is_none());

        let second = recorder.last_answer().unwrap();
        second.assert_text("What can I get you?");
        assert!(second.messenger().is_none());
    }

    #[test]
    fn integration_delays_are_preserved_per_record() {
        init_tracing();
        let recorder = BusRecorder::new();
        recorder.record(Action::sentence("a"), Duration::from_millis(0));
        recorder.record(Action::sentence("b"), Duration::from_millis(750));

        let records = recorder.records();
        assert_eq!(records[0].delay(), Duration::ZERO);
        assert_eq!(records[1].delay(), Duration::from_millis(750));
    }
}
