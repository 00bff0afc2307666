//! Telegram Bot API caller
//!
//! Builds method URLs from the configured bot token, posts via the injected
//! transport and interprets the response. Every response body is logged at
//! info level before the status check so failed calls still leave an audit
//! trail.

use std::sync::Arc;

use crate::transport::{FormPart, Transport, TransportResponse};
use crate::{Error, Result};

/// Telegram Bot API base URL
pub(crate) const API_BASE: &str = "https://api.telegram.org/bot";

/// Calls Bot API methods on behalf of the handlers
pub(crate) struct ApiClient {
    token: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub(crate) fn new(token: String, transport: Arc<dyn Transport>) -> Self {
        Self { token, transport }
    }

    fn url(&self, method: &str) -> String {
        format!("{API_BASE}{}/{method}", self.token)
    }

    /// POST a JSON body to a Bot API method
    pub(crate) async fn call_json(&self, method: &str, body: &serde_json::Value) -> Result<()> {
        let response = self.transport.post_json(&self.url(method), body).await?;
        Self::check(method, &response)
    }

    /// POST a multipart form to a Bot API method
    pub(crate) async fn call_form(&self, method: &str, parts: Vec<FormPart>) -> Result<()> {
        let response = self.transport.post_form(&self.url(method), parts).await?;
        Self::check(method, &response)
    }

    fn check(method: &str, response: &TransportResponse) -> Result<()> {
        tracing::info!(method, body = %response.body, "telegram api response");

        if !response.is_success() {
            return Err(Error::Api {
                status: response.status,
                body: response.body.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_embeds_token_and_method() {
        let client = ApiClient::new(
            "TEST_TOKEN".to_string(),
            Arc::new(crate::transport::HttpTransport::new()),
        );
        assert_eq!(
            client.url("sendMessage"),
            "https://api.telegram.org/botTEST_TOKEN/sendMessage"
        );
    }

    #[test]
    fn test_non_success_maps_to_api_error() {
        let response = TransportResponse {
            status: 403,
            body: r#"{"ok":false,"description":"Forbidden"}"#.to_string(),
        };
        let err = ApiClient::check("sendMessage", &response).unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("Forbidden"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
