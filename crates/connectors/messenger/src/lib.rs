//! Messenger connector message representations for the Parley bot
//! framework.
//!
//! This crate defines the typed payloads a bot attaches to a sentence
//! when replying through the messenger connector. Delivery itself is
//! handled by the framework's dispatch layer, not here.

pub mod types;

pub use types::{MessengerMessage, QuickReply};

use parley_core::ConnectorType;

/// Connector identifier for messenger.
pub const CONNECTOR_ID: &str = "messenger";

/// The messenger [`ConnectorType`].
#[must_use]
pub fn connector_type() -> ConnectorType {
    ConnectorType::new(CONNECTOR_ID)
}
