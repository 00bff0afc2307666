//! Plugin configuration

use serde::Deserialize;

use crate::{Error, Result};

/// Telegram plugin configuration, supplied once at initialization
#[derive(Debug, Clone, Deserialize)]
pub struct PluginSpec {
    /// Telegram bot token used to build API URLs
    pub token: String,
}

impl PluginSpec {
    /// Create a configuration from a bot token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Validate the configuration
    ///
    /// A blank token would only surface later as a malformed-URL failure
    /// from the remote API, so it is rejected up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is missing or blank
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::Config(
                "missing or invalid 'token' specification".to_string(),
            ));
        }
        Ok(())
    }
}
