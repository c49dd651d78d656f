//! Inbound relay request types
//!
//! Defines the chat payload accepted on `POST /api/ai/stream`: roles,
//! plain or multimodal message content, attachments, and the model field
//! (a single identifier, a comma-joined string, or a list).

use serde::{Deserialize, Serialize};

/// Role of a message participant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message providing instructions or context
    System,
    /// User message from the human
    User,
    /// Assistant message from the AI
    Assistant,
    /// Tool/function result message
    Tool,
}

/// Image URL reference for multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    /// URL of the image (can be a data URL or an HTTP URL)
    pub url: String,
    /// Image detail level: "auto", "low", or "high"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A part of multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text {
        /// The text content
        text: String,
    },
    /// Image URL reference
    ImageUrl {
        /// The image URL details
        image_url: ImageUrl,
    },
}

/// Message content - either plain text or multimodal parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Content {
    /// Simple text content
    Text(String),
    /// Multimodal content with text and/or images
    Parts(Vec<ContentPart>),
}

impl Content {
    /// Extract text content from either variant
    ///
    /// For `Text`, returns the string directly. For `Parts`, concatenates
    /// all text parts.
    pub fn as_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    ContentPart::ImageUrl { .. } => None,
                })
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

/// A chat message with role and content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// The role of the message author
    pub role: Role,
    /// The content of the message
    pub content: Content,
}

/// File attachment carried alongside the message list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileAttachment {
    /// Declared media type, e.g. "image/png"
    #[serde(rename = "type")]
    pub kind: String,
    /// Where the attachment bytes live
    pub url: String,
}

impl FileAttachment {
    /// Whether this attachment declares an image media type
    pub fn is_image(&self) -> bool {
        self.kind.starts_with("image")
    }
}

/// Model field of the inbound payload
///
/// Callers send either a single identifier (possibly comma-joined) or a
/// list of identifiers tried in order by the fallback dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ModelSpec {
    /// A single model identifier, possibly comma-joined
    One(String),
    /// An explicit ordered list of model identifiers
    Many(Vec<String>),
}

impl Default for ModelSpec {
    fn default() -> Self {
        ModelSpec::One(String::new())
    }
}

impl ModelSpec {
    /// Normalize into an ordered list of candidate model identifiers.
    ///
    /// Comma-joined strings are split, entries are trimmed, and empty
    /// entries are dropped. Order is preserved; no deduplication.
    pub fn candidates(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            ModelSpec::One(s) => s.split(',').collect(),
            ModelSpec::Many(list) => list.iter().flat_map(|s| s.split(',')).collect(),
        };
        raw.iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Inbound chat relay request
///
/// Every field is defaulted so an empty request body deserializes to an
/// empty payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatRelayRequest {
    /// Model identifier(s) to request from the upstream
    pub model: ModelSpec,
    /// Ordered conversation history
    pub messages: Vec<Message>,
    /// Optional file attachments; image entries trigger the multimodal rewrite
    pub files: Vec<FileAttachment>,
    /// Index into the upstream target table; any integer is well-formed,
    /// out-of-range values fail after the response is committed
    pub server_idx: i64,
}
