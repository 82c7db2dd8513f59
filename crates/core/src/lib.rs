pub mod action;
pub mod connector;
pub mod error;

pub use action::{Action, AttachmentKind, SendSentence};
pub use connector::{ConnectorMessage, ConnectorType};
pub use error::CoreError;
