//! Boundary to the external casting SDK.
//!
//! The SDK owns discovery, session negotiation and transport. The sender only
//! sees the entry points below; everything behind them is opaque.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cast_protocol::{ApiConfig, LoadRequest, ReceiverAvailability};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;

/// Error codes reported by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdkErrorCode {
	Cancel,
	Timeout,
	ApiNotInitialized,
	InvalidParameter,
	ExtensionNotCompatible,
	ExtensionMissing,
	ReceiverUnavailable,
	SessionError,
	ChannelError,
	LoadMediaFailed,
}

impl SdkErrorCode {
	pub fn as_str(self) -> &'static str {
		match self {
			SdkErrorCode::Cancel => "cancel",
			SdkErrorCode::Timeout => "timeout",
			SdkErrorCode::ApiNotInitialized => "api_not_initialized",
			SdkErrorCode::InvalidParameter => "invalid_parameter",
			SdkErrorCode::ExtensionNotCompatible => "extension_not_compatible",
			SdkErrorCode::ExtensionMissing => "extension_missing",
			SdkErrorCode::ReceiverUnavailable => "receiver_unavailable",
			SdkErrorCode::SessionError => "session_error",
			SdkErrorCode::ChannelError => "channel_error",
			SdkErrorCode::LoadMediaFailed => "load_media_failed",
		}
	}
}

impl fmt::Display for SdkErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Failure value produced by any SDK call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {}", .description.as_deref().unwrap_or("no description"))]
pub struct SdkError {
	pub code: SdkErrorCode,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl SdkError {
	pub fn new(code: SdkErrorCode) -> Self {
		Self { code, description: None }
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// Notifications the SDK pushes outside of any request.
#[derive(Debug, Clone)]
pub enum SdkEvent {
	/// A session that outlived a previous sender instance was picked up again.
	SessionRestored(Arc<dyn CastSession>),
	/// The set of reachable receivers changed.
	ReceiverAvailability(ReceiverAvailability),
}

/// Entry points of the casting SDK.
#[async_trait]
pub trait CastSdk: Send + Sync {
	/// Whether the SDK is loaded and can be initialized.
	fn is_available(&self) -> bool;

	/// Initializes the SDK for `config.app_id`.
	async fn initialize(&self, config: &ApiConfig) -> Result<(), SdkError>;

	/// Negotiates a new session with a receiver.
	async fn request_session(&self) -> Result<Arc<dyn CastSession>, SdkError>;

	/// Subscribes to [`SdkEvent`] notifications.
	fn subscribe(&self) -> broadcast::Receiver<SdkEvent>;
}

/// An established connection to a receiver.
#[async_trait]
pub trait CastSession: Send + Sync + fmt::Debug {
	fn session_id(&self) -> &str;

	/// Friendly name of the receiver this session is attached to.
	fn receiver_name(&self) -> &str;

	/// Submits `request`; resolves once the receiver accepted or rejected it.
	async fn load_media(&self, request: LoadRequest) -> Result<(), SdkError>;
}
