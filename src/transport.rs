//! HTTP transport seam
//!
//! The plugin never constructs its own networking internally; all outbound
//! calls go through the [`Transport`] trait so tests can substitute a
//! recording implementation. [`HttpTransport`] is the production
//! implementation backed by `reqwest`.

use async_trait::async_trait;

use crate::Result;

/// An HTTP response reduced to what the plugin interprets
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body text
    pub body: String,
}

impl TransportResponse {
    /// Whether the status code is a 2xx success
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One field of a multipart form post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// Binary file field
    File {
        /// Field name
        name: String,
        /// Filename reported to the server
        file_name: String,
        /// File payload
        bytes: Vec<u8>,
    },
}

impl FormPart {
    /// Build a text field
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a file field
    #[must_use]
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Outbound HTTP transport injected into the plugin
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be sent or the response body
    /// could not be read
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse>;

    /// POST a multipart form
    ///
    /// # Errors
    ///
    /// Returns error if the request could not be sent or the response body
    /// could not be read
    async fn post_form(&self, url: &str, parts: Vec<FormPart>) -> Result<TransportResponse>;
}

/// Production transport backed by a `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh client
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing client
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse> {
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }

    async fn post_form(&self, url: &str, parts: Vec<FormPart>) -> Result<TransportResponse> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    bytes,
                } => form.part(name, reqwest::multipart::Part::bytes(bytes).file_name(file_name)),
            };
        }

        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_range() {
        for status in [200, 201, 204, 299] {
            let response = TransportResponse {
                status,
                body: String::new(),
            };
            assert!(response.is_success());
        }
        for status in [199, 301, 400, 404, 500] {
            let response = TransportResponse {
                status,
                body: String::new(),
            };
            assert!(!response.is_success());
        }
    }
}
