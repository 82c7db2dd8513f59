use parley_core::{ConnectorMessage, ConnectorType};
use serde::{Deserialize, Serialize};

use crate::connector_type;

/// A team-chat card message.
///
/// Renders as a card in channel clients: markdown body, optional title
/// bar with an accent color, and an optional list of name/value facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamChatMessage {
    /// Card body (supports basic markdown).
    pub text: String,

    /// Card title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Accent color as a hex string (e.g. `"36A64F"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Name/value pairs rendered as a two-column table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,
}

/// One name/value row on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl TeamChatMessage {
    /// Create a card with the given body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            color: None,
            facts: Vec::new(),
        }
    }

    /// Set the card title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the accent color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Append a fact row.
    #[must_use]
    pub fn with_fact(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facts.push(Fact {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

impl ConnectorMessage for TeamChatMessage {
    fn connector_type(&self) -> ConnectorType {
        connector_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_serializes_correctly() {
        let card = TeamChatMessage::new("Deploy finished")
            .with_title("CI")
            .with_color("36A64F")
            .with_fact("branch", "main");

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["text"], "Deploy finished");
        assert_eq!(json["title"], "CI");
        assert_eq!(json["color"], "36A64F");
        assert_eq!(json["facts"][0]["name"], "branch");
    }

    #[test]
    fn minimal_card_omits_optional_fields() {
        let card = TeamChatMessage::new("Just text");
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["text"], "Just text");
        assert!(json.get("title").is_none());
        assert!(json.get("color").is_none());
        assert!(json.get("facts").is_none());
    }

    #[test]
    fn connector_type_is_teamchat() {
        let card = TeamChatMessage::new("hi");
        assert_eq!(card.connector_type().as_str(), "teamchat");
    }
}
