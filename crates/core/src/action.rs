use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::connector::{ConnectorMessage, ConnectorType};
use crate::error::CoreError;

/// One outbound bot action, as intercepted between the bot and its
/// connectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// A textual reply, optionally carrying platform-specific rich
    /// payloads keyed by connector.
    SendSentence(SendSentence),
    /// A prompt offering the user a set of button choices.
    SendChoice {
        /// Prompt title shown above the buttons.
        title: String,
        /// Button labels, in display order.
        buttons: Vec<String>,
    },
    /// A media attachment.
    SendAttachment {
        /// Public URL of the attachment.
        url: String,
        /// Media kind.
        kind: AttachmentKind,
    },
}

impl Action {
    /// Shorthand for a plain-text sentence with no rich payloads.
    #[must_use]
    pub fn sentence(text: impl Into<String>) -> Self {
        Self::SendSentence(SendSentence::new(text))
    }

    /// The sentence payload, if this action is a [`Action::SendSentence`].
    #[must_use]
    pub fn as_send_sentence(&self) -> Option<&SendSentence> {
        match self {
            Self::SendSentence(sentence) => Some(sentence),
            _ => None,
        }
    }

    /// The sentence payload of an action that must be a sentence.
    ///
    /// # Panics
    ///
    /// Panics if the action is any other variant. Calling this on a
    /// non-sentence action is a bug in the calling test, not a
    /// recoverable condition.
    #[must_use]
    pub fn expect_send_sentence(&self) -> &SendSentence {
        self.as_send_sentence()
            .unwrap_or_else(|| panic!("expected SendSentence, got {self:?}"))
    }

    /// Check if this action is a `SendSentence`.
    #[must_use]
    pub fn is_send_sentence(&self) -> bool {
        matches!(self, Self::SendSentence(_))
    }

    /// Check if this action is a `SendChoice`.
    #[must_use]
    pub fn is_send_choice(&self) -> bool {
        matches!(self, Self::SendChoice { .. })
    }

    /// Check if this action is a `SendAttachment`.
    #[must_use]
    pub fn is_send_attachment(&self) -> bool {
        matches!(self, Self::SendAttachment { .. })
    }
}

/// Media kind of a [`Action::SendAttachment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Audio,
    Video,
    File,
}

/// A textual reply with optional per-connector rich payloads.
///
/// The plain text is optional: a sentence may carry only rich payloads
/// (a card, a carousel) with no fallback text. The rich payloads are
/// stored in their tagged [`serde_json::Value`] form; the typed structs
/// live in the connector crates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendSentence {
    /// Plain-text body, absent for rich-only sentences.
    pub text: Option<String>,

    /// Platform-specific payloads keyed by connector.
    #[serde(default)]
    pub messages: HashMap<ConnectorType, serde_json::Value>,
}

impl SendSentence {
    /// Create a sentence with the given plain text and no rich payloads.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            messages: HashMap::new(),
        }
    }

    /// Create a sentence with no plain text. At least one rich payload
    /// should be attached before the sentence is sent.
    #[must_use]
    pub fn rich_only() -> Self {
        Self::default()
    }

    /// Attach a typed connector message, keyed by its own connector type.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] if the message cannot be
    /// serialized into its tagged payload form.
    pub fn with_message(mut self, message: &impl ConnectorMessage) -> Result<Self, CoreError> {
        let payload = serde_json::to_value(message)?;
        self.messages.insert(message.connector_type(), payload);
        Ok(self)
    }

    /// The payload registered for the given connector, if any.
    #[must_use]
    pub fn message_for(&self, connector: &ConnectorType) -> Option<&serde_json::Value> {
        self.messages.get(connector)
    }

    /// The plain-text body, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
