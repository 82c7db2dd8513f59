//! Voice-assistant connector message representations for the Parley bot
//! framework.
//!
//! Defines the typed response envelope a bot attaches to a sentence when
//! replying through the voice-assistant connector.

pub mod types;

pub use types::VoiceResponse;

use parley_core::ConnectorType;

/// Connector identifier for the voice assistant.
pub const CONNECTOR_ID: &str = "voice";

/// The voice-assistant [`ConnectorType`].
#[must_use]
pub fn connector_type() -> ConnectorType {
    ConnectorType::new(CONNECTOR_ID)
}
