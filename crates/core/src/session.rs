//! Tracking of the single active session.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::sdk::CastSession;

/// Connection state of the sender.
///
/// There is no way back to `Disconnected`: session loss is not observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
	Disconnected,
	Connected,
}

/// Holds at most one session reference.
#[derive(Debug, Default)]
pub struct SessionCoordinator {
	active: Option<Arc<dyn CastSession>>,
}

impl SessionCoordinator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `session`, replacing whatever was held before.
	///
	/// Used for both restored and freshly requested sessions.
	pub fn on_session_established(&mut self, session: Arc<dyn CastSession>) {
		info!(
			target = "cast",
			session_id = session.session_id(),
			receiver = session.receiver_name(),
			replaced = self.active.is_some(),
			"session established"
		);
		self.active = Some(session);
	}

	pub fn has_active_session(&self) -> bool {
		self.active.is_some()
	}

	pub fn active_session(&self) -> Option<&Arc<dyn CastSession>> {
		self.active.as_ref()
	}

	pub fn state(&self) -> ConnectionState {
		if self.has_active_session() {
			ConnectionState::Connected
		} else {
			ConnectionState::Disconnected
		}
	}
}
