//! Error types for the sender.

use thiserror::Error;

use crate::sdk::SdkError;

/// Result type alias for sender operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a sender operation.
///
/// All variants are handled the same way by callers: log and stop. None of
/// them is retried.
#[derive(Debug, Error)]
pub enum Error {
	/// The SDK never reported itself available during startup polling.
	#[error("cast sdk unavailable after {attempts} availability checks")]
	SdkUnavailable { attempts: u32 },

	/// `initialize` was rejected by the SDK.
	#[error("cast sdk initialization failed: {0}")]
	Initialization(SdkError),

	/// Session negotiation was rejected or cancelled.
	#[error("session request failed: {0}")]
	SessionRequest(SdkError),

	/// A launch was attempted before any session was established.
	#[error("no active session found; request a session first")]
	NoActiveSession,

	/// The page element carries no usable source URL.
	#[error("video source URL is missing in element #{element_id}")]
	MissingSource { element_id: String },

	/// The session rejected the load request.
	#[error("media loading error: {0}")]
	MediaLoad(SdkError),
}
