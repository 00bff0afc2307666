//! Plugin entry point: initialization, dispatch and the send handlers

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::config::PluginSpec;
use crate::endpoint::Endpoint;
use crate::normalize::normalize;
use crate::request::{ContentItem, ExecutionRequest};
use crate::transport::{FormPart, HttpTransport, Transport};
use crate::{Error, Result};

/// Send-only Telegram plugin
///
/// Must be initialized with a [`PluginSpec`] before execution. After
/// initialization the instance holds no mutable state and is safe to share
/// across concurrent invocations.
pub struct TelegramPlugin {
    transport: Arc<dyn Transport>,
    api: Option<ApiClient>,
}

impl TelegramPlugin {
    /// Create a plugin using the production HTTP transport
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()))
    }

    /// Create a plugin around an injected transport
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api: None,
        }
    }

    /// Load the configuration and mark the instance ready
    ///
    /// Calling again replaces the previous configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the bot token is missing or blank
    pub fn initialize(&mut self, spec: PluginSpec) -> Result<()> {
        spec.validate()?;
        self.api = Some(ApiClient::new(spec.token, Arc::clone(&self.transport)));
        tracing::info!("telegram plugin initialized");
        Ok(())
    }

    /// Execute one request
    ///
    /// Items are sent strictly one after another; a failure aborts the
    /// remaining items. Every send is an independent committed side effect,
    /// so re-executing identical input sends again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before [`Self::initialize`],
    /// [`Error::Validation`] for a blank chat id or invalid payload,
    /// [`Error::UnsupportedOperation`] for an unrecognized operation,
    /// [`Error::Api`] for a non-success Telegram response and
    /// [`Error::Cancelled`] if the token is cancelled
    pub async fn execute(
        &self,
        request: ExecutionRequest,
        cancel: CancellationToken,
    ) -> Result<()> {
        let api = self.api.as_ref().ok_or(Error::NotInitialized)?;

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        if request.chat_id.trim().is_empty() {
            return Err(Error::Validation(
                "missing or invalid 'chat_id' input".to_string(),
            ));
        }

        match request.operation.to_lowercase().as_str() {
            "sendmessage" => Self::send_message(api, request, &cancel).await,
            "sendfile" => Self::send_file(api, request, &cancel).await,
            _ => Err(Error::UnsupportedOperation(request.operation)),
        }
    }

    /// Send each item as a Markdown text message
    async fn send_message(
        api: &ApiClient,
        request: ExecutionRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let items = normalize(request.data, false)?;

        for item in items {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            // Blankness check only; the text itself is posted verbatim
            let text = item
                .text
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .ok_or_else(|| {
                    Error::Validation("invalid or empty message content".to_string())
                })?;

            let payload = serde_json::json!({
                "chat_id": request.chat_id,
                "text": text,
                "parse_mode": "Markdown",
            });

            tokio::select! {
                () = cancel.cancelled() => return Err(Error::Cancelled),
                result = api.call_json("sendMessage", &payload) => result?,
            }

            tracing::debug!(chat_id = %request.chat_id, item_id = %item.id, "telegram message sent");
        }

        Ok(())
    }

    /// Upload each item to the endpoint selected by its name's extension
    async fn send_file(
        api: &ApiClient,
        request: ExecutionRequest,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let items = normalize(request.data, true)?;

        for item in items {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let ContentItem { id, text, bytes } = item;
            let bytes = bytes.unwrap_or_else(|| text.unwrap_or_default().into_bytes());

            let endpoint = Endpoint::for_file_name(&id);
            let parts = vec![
                FormPart::text("chat_id", request.chat_id.clone()),
                FormPart::file(endpoint.field, id.clone(), bytes),
            ];

            tokio::select! {
                () = cancel.cancelled() => return Err(Error::Cancelled),
                result = api.call_form(endpoint.method, parts) => result?,
            }

            tracing::debug!(chat_id = %request.chat_id, file = %id, method = endpoint.method, "telegram file sent");
        }

        Ok(())
    }
}

impl Default for TelegramPlugin {
    fn default() -> Self {
        Self::new()
    }
}
