//! Answer extraction from upstream JSON responses
//!
//! Upstreams disagree on where the answer text lives. Rather than
//! speculative field access, extraction is an ordered list of named rules
//! applied in priority order; the first rule yielding non-empty text wins,
//! and a fixed placeholder stands in when none match.

use serde_json::Value;

/// Placeholder answer when no extraction rule matches.
pub const PLACEHOLDER: &str = "No content received";

/// A named location where an upstream may put the answer text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractRule {
    /// `choices[0].message.content` - standard chat completion
    ChoiceMessageContent,
    /// `choices[0].delta.content` - streaming-style chunk shape
    ChoiceDeltaContent,
    /// top-level `content` field
    BareContent,
}

impl ExtractRule {
    fn apply(&self, value: &Value) -> Option<String> {
        match self {
            ExtractRule::ChoiceMessageContent => value
                .get("choices")?
                .get(0)?
                .get("message")?
                .get("content")?
                .as_str()
                .map(str::to_owned),
            ExtractRule::ChoiceDeltaContent => value
                .get("choices")?
                .get(0)?
                .get("delta")?
                .get("content")?
                .as_str()
                .map(str::to_owned),
            ExtractRule::BareContent => {
                value.get("content")?.as_str().map(str::to_owned)
            }
        }
    }
}

/// Extraction order for the no-key upstream (target 0)
pub const DIRECT_RULES: &[ExtractRule] =
    &[ExtractRule::ChoiceMessageContent, ExtractRule::BareContent];

/// Extraction order for the fallback-chain upstream (target 1)
pub const FALLBACK_RULES: &[ExtractRule] = &[
    ExtractRule::ChoiceMessageContent,
    ExtractRule::ChoiceDeltaContent,
    ExtractRule::BareContent,
];

/// Apply `rules` in order; first non-empty match wins, placeholder otherwise.
pub fn extract_answer(value: &Value, rules: &[ExtractRule]) -> String {
    rules
        .iter()
        .filter_map(|rule| rule.apply(value))
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
