//! Relay domain types and the simulated streaming machinery

pub mod attachments;
pub mod typewriter;
pub mod types;

pub use types::{ChatRelayRequest, Content, ContentPart, FileAttachment, Message, ModelSpec, Role};
