//! Multimodal rewrite of the outgoing message list
//!
//! When the payload carries image attachments, the most recent user message
//! is rewritten into multimodal parts so OpenAI-style upstreams receive the
//! images inline. Only that single message is ever touched.

use crate::relay::types::{Content, ContentPart, FileAttachment, ImageUrl, Message, Role};

/// Embed image attachments into the last user message.
///
/// Non-image attachments are ignored. If there are no image attachments, or
/// no user message exists, the list passes through unchanged. If the last
/// user message is already multimodal (`Content::Parts`) it also passes
/// through unchanged; otherwise its string content becomes the first text
/// part, followed by one image part per attachment in order.
pub fn embed_image_attachments(
    mut messages: Vec<Message>,
    files: &[FileAttachment],
) -> Vec<Message> {
    let images: Vec<&FileAttachment> = files.iter().filter(|f| f.is_image()).collect();
    if images.is_empty() {
        return messages;
    }

    let Some(idx) = messages.iter().rposition(|m| m.role == Role::User) else {
        return messages;
    };

    if matches!(messages[idx].content, Content::Parts(_)) {
        // Already multimodal, pass through untouched
        return messages;
    }

    let mut parts = vec![ContentPart::Text {
        text: messages[idx].content.as_text(),
    }];
    parts.extend(images.iter().map(|file| ContentPart::ImageUrl {
        image_url: ImageUrl {
            url: file.url.clone(),
            detail: None,
        },
    }));
    messages[idx].content = Content::Parts(parts);

    messages
}
