//! Sender controller: the owner of all session state.
//!
//! A [`CastController`] replaces process-wide session state. Whoever drives
//! the sender (a UI, the CLI) owns one and passes it where launches happen.

use std::sync::Arc;

use cast_protocol::{ApiConfig, LoadRequest, ReceiverAvailability};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

use crate::content_type::ContentTypeResolver;
use crate::error::{Error, Result};
use crate::launch::MediaLaunchFlow;
use crate::options::SenderOptions;
use crate::page::SourceSelector;
use crate::sdk::{CastSdk, SdkEvent};
use crate::session::{ConnectionState, SessionCoordinator};

pub struct CastController {
	sdk: Arc<dyn CastSdk>,
	options: SenderOptions,
	sessions: SessionCoordinator,
	flow: MediaLaunchFlow,
	selector: SourceSelector,
	events: broadcast::Receiver<SdkEvent>,
	receiver_availability: Option<ReceiverAvailability>,
}

impl CastController {
	/// Creates a disconnected controller and subscribes to SDK events.
	pub fn new(sdk: Arc<dyn CastSdk>, options: SenderOptions) -> Self {
		let events = sdk.subscribe();
		let flow = MediaLaunchFlow::new(ContentTypeResolver::new(options.extension_scan));
		let selector = SourceSelector::new(options.source_element_id.clone());
		Self {
			sdk,
			options,
			sessions: SessionCoordinator::new(),
			flow,
			selector,
			events,
			receiver_availability: None,
		}
	}

	pub fn options(&self) -> &SenderOptions {
		&self.options
	}

	pub fn sessions(&self) -> &SessionCoordinator {
		&self.sessions
	}

	pub fn has_active_session(&self) -> bool {
		self.sessions.has_active_session()
	}

	pub fn state(&self) -> ConnectionState {
		self.sessions.state()
	}

	/// Last receiver availability reported by the SDK.
	pub fn receiver_availability(&self) -> Option<ReceiverAvailability> {
		self.receiver_availability
	}

	/// Waits for the SDK to become available, then initializes it.
	///
	/// Availability is checked every `poll_interval`, at most `max_polls`
	/// times.
	pub async fn bootstrap(&mut self) -> Result<()> {
		let max_polls = self.options.max_polls.max(1);
		let mut attempts = 0;
		loop {
			attempts += 1;
			if self.sdk.is_available() {
				break;
			}
			if attempts >= max_polls {
				error!(target = "cast", attempts, "cast sdk unavailable");
				return Err(Error::SdkUnavailable { attempts });
			}
			debug!(target = "cast", attempts, "cast sdk not available yet");
			tokio::time::sleep(self.options.poll_interval).await;
		}

		let config = ApiConfig::new(self.options.app_id.clone());
		match self.sdk.initialize(&config).await {
			Ok(()) => {
				info!(target = "cast", app_id = %config.app_id, "cast api initialized successfully");
				Ok(())
			}
			Err(err) => {
				error!(target = "cast", error = %err, "cast api initialization failed");
				Err(Error::Initialization(err))
			}
		}
	}

	/// Asks the SDK for a new session and makes it the active one.
	pub async fn request_session(&mut self) -> Result<()> {
		self.pump_events();
		match self.sdk.request_session().await {
			Ok(session) => {
				self.sessions.on_session_established(session);
				Ok(())
			}
			Err(err) => {
				error!(target = "cast", error = %err, "error launching app");
				Err(Error::SessionRequest(err))
			}
		}
	}

	/// Applies pending SDK notifications.
	pub fn pump_events(&mut self) {
		loop {
			match self.events.try_recv() {
				Ok(SdkEvent::SessionRestored(session)) => self.sessions.on_session_established(session),
				Ok(SdkEvent::ReceiverAvailability(availability)) => {
					info!(target = "cast", ?availability, "receiver availability changed");
					self.receiver_availability = Some(availability);
				}
				Err(TryRecvError::Lagged(skipped)) => {
					warn!(target = "cast", skipped, "dropped sdk events");
				}
				Err(TryRecvError::Empty | TryRecvError::Closed) => break,
			}
		}
	}

	/// Launches `media_url` through the active session.
	pub async fn launch(&mut self, media_url: &str) -> Result<LoadRequest> {
		self.pump_events();
		self.flow.launch(&self.sessions, media_url).await
	}

	/// Reads the media URL from `html` and launches it.
	pub async fn launch_from_page(&mut self, html: &str) -> Result<LoadRequest> {
		let Some(media_url) = self.selector.select(html) else {
			error!(target = "cast", element = %self.selector.element_id(), "video source URL is missing");
			return Err(Error::MissingSource {
				element_id: self.selector.element_id().to_string(),
			});
		};
		self.launch(&media_url).await
	}
}
