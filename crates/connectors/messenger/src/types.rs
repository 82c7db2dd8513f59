use parley_core::{ConnectorMessage, ConnectorType};
use serde::{Deserialize, Serialize};

use crate::connector_type;

/// A messenger text message with optional quick replies.
///
/// Follows the messenger send-API shape: a `text` body plus an optional
/// `quick_replies` array rendered as tappable chips under the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessengerMessage {
    /// Message body.
    pub text: String,

    /// Quick-reply chips, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

/// One tappable quick-reply chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Chip type — always `"text"` for plain quick replies.
    pub content_type: String,

    /// Label shown on the chip.
    pub title: String,

    /// Payload echoed back when the chip is tapped.
    pub payload: String,
}

impl MessengerMessage {
    /// Create a plain text message.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quick_replies: Vec::new(),
        }
    }

    /// Append a quick-reply chip.
    #[must_use]
    pub fn with_quick_reply(mut self, title: impl Into<String>, payload: impl Into<String>) -> Self {
        self.quick_replies.push(QuickReply {
            content_type: "text".to_owned(),
            title: title.into(),
            payload: payload.into(),
        });
        self
    }
}

impl ConnectorMessage for MessengerMessage {
    fn connector_type(&self) -> ConnectorType {
        connector_type()
    }
}
