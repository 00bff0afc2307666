//! Telegram endpoint selection for file sends
//!
//! Pure mapping from a file name's extension to the Bot API method and the
//! multipart field the payload must be posted under. Extension only, no
//! content sniffing.

/// A Telegram Bot API upload endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Bot API method name (e.g. `sendPhoto`)
    pub method: &'static str,
    /// Multipart form field carrying the file payload
    pub field: &'static str,
}

impl Endpoint {
    /// Select the endpoint for a file name, case-insensitively
    ///
    /// Unknown extensions and names without an extension fall back to
    /// `sendDocument`.
    #[must_use]
    pub fn for_file_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "bmp" => Self {
                method: "sendPhoto",
                field: "photo",
            },
            "mp4" => Self {
                method: "sendVideo",
                field: "video",
            },
            "mp3" | "ogg" => Self {
                method: "sendAudio",
                field: "audio",
            },
            _ => Self {
                method: "sendDocument",
                field: "document",
            },
        }
    }
}
