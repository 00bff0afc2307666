//! Input normalization
//!
//! Converts the polymorphic request payload into a uniform ordered sequence
//! of content items. Raw strings become one synthetic item with a fresh
//! random id; in file mode a base64-encoded raw string is decoded to bytes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use uuid::Uuid;

use crate::request::{ContentItem, InputData};
use crate::{Error, Result};

/// Normalize the request payload into content items, preserving order
///
/// `is_file` selects binary mode for raw strings (base64 decode attempt)
/// over text mode (string carried through verbatim).
pub(crate) fn normalize(data: Option<InputData>, is_file: bool) -> Result<Vec<ContentItem>> {
    match data {
        None => Err(Error::Validation("input data cannot be null".to_string())),
        Some(InputData::Single(item)) => Ok(vec![item]),
        Some(InputData::Many(items)) => Ok(items),
        Some(InputData::Raw(raw)) => {
            let id = Uuid::new_v4().to_string();
            let item = if is_file {
                // Valid standard base64 is decoded; anything else is sent
                // as the literal UTF-8 bytes of the string.
                let bytes = BASE64
                    .decode(raw.trim())
                    .unwrap_or_else(|_| raw.into_bytes());
                ContentItem::binary(id, bytes)
            } else {
                ContentItem::text(id, raw)
            };
            Ok(vec![item])
        }
    }
}
