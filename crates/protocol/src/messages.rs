//! Sender-side configuration and channel messages.
//!
//! [`ApiConfig`] is what a sender hands to the SDK at initialization.
//! [`LoadMessage`] is the envelope a load request travels in on the media
//! channel; [`ReceiverAvailability`] is reported by the SDK whenever the set
//! of reachable receivers changes.

use serde::{Deserialize, Serialize};

use crate::media::{LoadRequest, MediaInfo};

/// Application id of the stock receiver that plays plain media URLs.
pub const DEFAULT_MEDIA_RECEIVER_APP_ID: &str = "CC1AD845";

/// Namespace of the media control channel.
pub const MEDIA_NAMESPACE: &str = "urn:x-cast:com.google.cast.media";

/// Message type tag for load requests.
pub const LOAD_MESSAGE_TYPE: &str = "LOAD";

/// Configuration supplied to the SDK at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
	/// Receiver application to launch when a session is requested.
	pub app_id: String,
}

impl ApiConfig {
	pub fn new(app_id: impl Into<String>) -> Self {
		Self { app_id: app_id.into() }
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(DEFAULT_MEDIA_RECEIVER_APP_ID)
	}
}

/// Whether at least one receiver is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverAvailability {
	Available,
	Unavailable,
}

/// `LOAD` envelope sent on [`MEDIA_NAMESPACE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMessage {
	#[serde(rename = "type")]
	pub message_type: String,
	pub request_id: u32,
	pub session_id: String,
	pub media: MediaInfo,
	pub autoplay: bool,
	pub current_time: f64,
}

impl LoadMessage {
	/// Wraps `request` for delivery to the session identified by `session_id`.
	pub fn new(request_id: u32, session_id: impl Into<String>, request: &LoadRequest) -> Self {
		Self {
			message_type: LOAD_MESSAGE_TYPE.to_string(),
			request_id,
			session_id: session_id.into(),
			media: request.media.clone(),
			autoplay: request.autoplay,
			current_time: request.current_time,
		}
	}
}
