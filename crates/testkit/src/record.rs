//! A single recorded bot action and its assertion surface.

use std::time::Duration;

use parley_core::{Action, ConnectorMessage, ConnectorType};

/// One outbound action intercepted from a bot under test, paired with
/// the delay after which it was emitted.
///
/// Both fields are set at construction and never change; every method is
/// a read of the two fields. An instance belongs to the test case that
/// created it and is discarded with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAction {
    action: Action,
    delay: Duration,
}

impl RecordedAction {
    /// Pair an intercepted action with its emission delay.
    #[must_use]
    pub fn new(action: Action, delay: Duration) -> Self {
        Self { action, delay }
    }

    /// The recorded action.
    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Delay between the previous action and this one.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The payload this action carries for the given connector.
    ///
    /// Total: returns `None` when the action is not a sentence, and when
    /// the sentence carries no payload for that connector. Absence is a
    /// normal outcome here, unlike [`text`](Self::text).
    #[must_use]
    pub fn message_for(&self, connector: &ConnectorType) -> Option<&serde_json::Value> {
        self.action
            .as_send_sentence()
            .and_then(|sentence| sentence.message_for(connector))
    }

    /// The messenger payload, if any.
    #[must_use]
    pub fn messenger(&self) -> Option<&serde_json::Value> {
        self.message_for(&parley_messenger::connector_type())
    }

    /// The voice-assistant payload, if any.
    #[must_use]
    pub fn voice(&self) -> Option<&serde_json::Value> {
        self.message_for(&parley_voice::connector_type())
    }

    /// The team-chat payload, if any.
    #[must_use]
    pub fn teamchat(&self) -> Option<&serde_json::Value> {
        self.message_for(&parley_teamchat::connector_type())
    }

    /// The plain text of the recorded sentence.
    ///
    /// # Panics
    ///
    /// Panics if the action is not a sentence. A test inspecting text on
    /// a choice or attachment is wrongly written, and that must surface
    /// as a loud failure rather than silent absence.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.action.expect_send_sentence().text()
    }

    /// Assert that the recorded sentence's text equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics on mismatch, or if the action is not a sentence.
    pub fn assert_text(&self, expected: &str) {
        let actual = self.text();
        assert_eq!(
            actual,
            Some(expected),
            "expected text '{expected}', got {actual:?}"
        );
    }

    /// Like [`assert_text`](Self::assert_text), prefixing the failure
    /// report with a caller-supplied context message.
    ///
    /// # Panics
    ///
    /// Panics on mismatch, or if the action is not a sentence.
    pub fn assert_text_with(&self, expected: &str, context: &str) {
        let actual = self.text();
        assert_eq!(
            actual,
            Some(expected),
            "{context}: expected text '{expected}', got {actual:?}"
        );
    }

    /// Assert that the payload recorded for `expected`'s own connector
    /// equals `expected`.
    ///
    /// The connector is derived from the expected message itself, so a
    /// test never names the connector twice.
    ///
    /// # Panics
    ///
    /// Panics on mismatch, including when no payload was recorded for
    /// that connector.
    pub fn assert_message(&self, expected: &impl ConnectorMessage) {
        let (connector, expected_payload) = Self::expected_payload(expected);
        let actual = self.message_for(&connector);
        assert_eq!(
            actual,
            Some(&expected_payload),
            "expected {connector} message {expected_payload}, got {actual:?}"
        );
    }

    /// Like [`assert_message`](Self::assert_message), prefixing the
    /// failure report with a caller-supplied context message.
    ///
    /// # Panics
    ///
    /// Panics on mismatch, including when no payload was recorded for
    /// that connector.
    pub fn assert_message_with(&self, expected: &impl ConnectorMessage, context: &str) {
        let (connector, expected_payload) = Self::expected_payload(expected);
        let actual = self.message_for(&connector);
        assert_eq!(
            actual,
            Some(&expected_payload),
            "{context}: expected {connector} message {expected_payload}, got {actual:?}"
        );
    }

    fn expected_payload(expected: &impl ConnectorMessage) -> (ConnectorType, serde_json::Value) {
        let payload = serde_json::to_value(expected).expect("expected message should serialize");
        (expected.connector_type(), payload)
    }
}
