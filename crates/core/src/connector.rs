use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a chat-platform connector (e.g. `messenger`, `voice`).
///
/// Connector crates declare their own well-known values; nothing is
/// hardcoded here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorType(String);

impl ConnectorType {
    /// Create a connector type from its string identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectorType {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A platform-specific message representation.
///
/// Connector crates implement this on their typed message structs. The
/// payload crosses the core boundary as a tagged [`serde_json::Value`]
/// keyed by [`ConnectorType`]; the connector that produced it owns the
/// format.
pub trait ConnectorMessage: Serialize {
    /// The connector this message is formatted for.
    fn connector_type(&self) -> ConnectorType;
}
