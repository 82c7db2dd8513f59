//! Team-chat connector message representations for the Parley bot
//! framework.
//!
//! Defines the typed card payload a bot attaches to a sentence when
//! replying into a team-chat channel.

pub mod types;

pub use types::{Fact, TeamChatMessage};

use parley_core::ConnectorType;

/// Connector identifier for team chat.
pub const CONNECTOR_ID: &str = "teamchat";

/// The team-chat [`ConnectorType`].
#[must_use]
pub fn connector_type() -> ConnectorType {
    ConnectorType::new(CONNECTOR_ID)
}
