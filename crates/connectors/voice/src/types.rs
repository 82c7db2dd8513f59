use parley_core::{ConnectorMessage, ConnectorType};
use serde::{Deserialize, Serialize};

use crate::connector_type;

/// A voice-assistant response envelope.
///
/// Carries the spoken text plus an optional shorter display text for
/// devices with a screen, and an optional reprompt spoken when the user
/// stays silent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResponse {
    /// Text to be spoken aloud.
    pub speech: String,

    /// Shorter text shown on screen-capable devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,

    /// Spoken again if the user does not answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,

    /// Whether the assistant closes the conversation after this response.
    #[serde(default)]
    pub end_conversation: bool,
}

impl VoiceResponse {
    /// Create a response with the given spoken text.
    pub fn new(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            display_text: None,
            reprompt: None,
            end_conversation: false,
        }
    }

    /// Set the on-screen display text.
    #[must_use]
    pub fn with_display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = Some(text.into());
        self
    }

    /// Set the reprompt text.
    #[must_use]
    pub fn with_reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    /// Mark this response as ending the conversation.
    #[must_use]
    pub fn ending_conversation(mut self) -> Self {
        self.end_conversation = true;
        self
    }
}

impl ConnectorMessage for VoiceResponse {
    fn connector_type(&self) -> ConnectorType {
        connector_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_correctly() {
        let response = VoiceResponse::new("Here is your forecast")
            .with_display_text("Forecast")
            .with_reprompt("Anything else?");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["speech"], "Here is your forecast");
        assert_eq!(json["display_text"], "Forecast");
        assert_eq!(json["reprompt"], "Anything else?");
        assert_eq!(json["end_conversation"], false);
    }

    #[test]
    fn minimal_response_omits_optional_fields() {
        let response = VoiceResponse::new("Goodbye").ending_conversation();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["speech"], "Goodbye");
        assert_eq!(json["end_conversation"], true);
        assert!(json.get("display_text").is_none());
        assert!(json.get("reprompt").is_none());
    }

    #[test]
    fn connector_type_is_voice() {
        let response = VoiceResponse::new("Hello");
        assert_eq!(response.connector_type().as_str(), "voice");
    }
}
