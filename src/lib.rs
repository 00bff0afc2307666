//! Telegram plugin - send messages and files to Telegram chats
//!
//! A thin adapter between a host automation system and the Telegram Bot
//! HTTP API. The host supplies a chat identifier, an operation name
//! (`sendmessage` or `sendfile`) and a polymorphic payload; the plugin
//! normalizes the payload into content items, picks the matching Bot API
//! endpoint and posts each item in sequence.
//!
//! ```no_run
//! use telegram_plugin::{ExecutionRequest, InputData, PluginSpec, TelegramPlugin};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> telegram_plugin::Result<()> {
//! let mut plugin = TelegramPlugin::new();
//! plugin.initialize(PluginSpec::new("123456:ABC-DEF"))?;
//!
//! let request = ExecutionRequest::new(
//!     "sendmessage",
//!     "12345",
//!     Some(InputData::Raw("Hello, World!".to_string())),
//! );
//! plugin.execute(request, CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

mod api;
pub mod config;
pub mod endpoint;
pub mod error;
mod normalize;
pub mod plugin;
pub mod request;
pub mod transport;

pub use config::PluginSpec;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use plugin::TelegramPlugin;
pub use request::{ContentItem, ExecutionRequest, InputData};
pub use transport::{FormPart, HttpTransport, Transport, TransportResponse};
