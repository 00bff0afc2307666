//! Execution request types and host parameter binding
//!
//! The host hands the plugin a loosely-typed parameter bag; serde binding
//! maps it onto these types. The `data` payload is polymorphic (one item, a
//! list of items, or a raw string) and is modeled as a closed union so the
//! normalizer pattern-matches instead of inspecting runtime types.

use serde::Deserialize;

/// Default operation when the host omits one
fn default_operation() -> String {
    "sendmessage".to_string()
}

/// A single plugin invocation, created fresh per `execute` call
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionRequest {
    /// Requested operation, matched case-insensitively at dispatch
    #[serde(default = "default_operation")]
    pub operation: String,

    /// Destination chat identifier, required non-blank
    #[serde(default, alias = "chatId")]
    pub chat_id: String,

    /// Outbound payload; `None` is rejected by the normalizer
    #[serde(default)]
    pub data: Option<InputData>,
}

impl ExecutionRequest {
    /// Build a request directly (host bindings usually go through serde)
    #[must_use]
    pub fn new(
        operation: impl Into<String>,
        chat_id: impl Into<String>,
        data: Option<InputData>,
    ) -> Self {
        Self {
            operation: operation.into(),
            chat_id: chat_id.into(),
            data,
        }
    }
}

/// The polymorphic `data` payload of a request
///
/// Binding tries variants in order: a single item map, a list of item maps,
/// then a raw string. A shape fitting none of these fails binding, which is
/// the unsupported-format error surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InputData {
    /// One content item
    Single(ContentItem),
    /// An ordered list of content items
    Many(Vec<ContentItem>),
    /// A raw string, interpreted per operation mode by the normalizer
    Raw(String),
}

/// One unit of outbound content, text or binary, with an identifying name
///
/// The `id` doubles as the filename for file sends. Exactly one of `text`
/// and `bytes` is meaningful depending on the operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    /// Opaque name/identifier for the item
    pub id: String,

    /// Textual content (message sends)
    #[serde(default, alias = "content")]
    pub text: Option<String>,

    /// Binary content (file sends)
    #[serde(default, alias = "rawData")]
    pub bytes: Option<Vec<u8>>,
}

impl ContentItem {
    /// Create a text item
    #[must_use]
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            bytes: None,
        }
    }

    /// Create a binary item
    #[must_use]
    pub fn binary(id: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            text: None,
            bytes: Some(bytes),
        }
    }
}
