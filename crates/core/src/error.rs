use thiserror::Error;

/// Errors produced by the core action types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A typed connector message could not be serialized into its tagged
    /// payload form.
    #[error("message serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
