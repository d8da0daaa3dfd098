//! In-process SDK that records load requests instead of casting them.
//!
//! Used by `castctl launch` and by tests. Failures can be injected at every
//! SDK entry point.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use cast_protocol::{ApiConfig, LoadMessage, LoadRequest, MEDIA_NAMESPACE, ReceiverAvailability};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use crate::sdk::{CastSdk, CastSession, SdkError, SdkErrorCode, SdkEvent};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// State shared between the SDK and every session it hands out.
#[derive(Debug, Default)]
struct Ledger {
	next_request_id: AtomicU32,
	submitted: Mutex<Vec<LoadMessage>>,
	load_failure: Mutex<Option<SdkError>>,
}

/// Dry-run implementation of [`CastSdk`].
pub struct DryRunSdk {
	receiver_name: String,
	available_after: u32,
	availability_checks: AtomicU32,
	initialized: AtomicBool,
	init_failure: Option<SdkError>,
	session_failure: Option<SdkError>,
	ledger: Arc<Ledger>,
	events: broadcast::Sender<SdkEvent>,
}

impl DryRunSdk {
	/// Creates an SDK that is immediately available and talks to `receiver_name`.
	pub fn new(receiver_name: impl Into<String>) -> Self {
		let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
		Self {
			receiver_name: receiver_name.into(),
			available_after: 0,
			availability_checks: AtomicU32::new(0),
			initialized: AtomicBool::new(false),
			init_failure: None,
			session_failure: None,
			ledger: Arc::new(Ledger::default()),
			events,
		}
	}

	/// Reports unavailable for the first `checks` availability checks.
	pub fn available_after(mut self, checks: u32) -> Self {
		self.available_after = checks;
		self
	}

	/// Makes `initialize` fail with `err`.
	pub fn fail_initialize(mut self, err: SdkError) -> Self {
		self.init_failure = Some(err);
		self
	}

	/// Makes `request_session` fail with `err`.
	pub fn fail_session_request(mut self, err: SdkError) -> Self {
		self.session_failure = Some(err);
		self
	}

	/// Makes every subsequent `load_media` fail with `err` (or succeed again with `None`).
	pub fn set_load_failure(&self, err: Option<SdkError>) {
		*self.ledger.load_failure.lock() = err;
	}

	pub fn receiver_name(&self) -> &str {
		&self.receiver_name
	}

	pub fn is_initialized(&self) -> bool {
		self.initialized.load(Ordering::SeqCst)
	}

	/// Number of times availability was checked.
	pub fn availability_checks(&self) -> u32 {
		self.availability_checks.load(Ordering::SeqCst)
	}

	/// Load messages accepted so far, in submission order.
	pub fn submitted(&self) -> Vec<LoadMessage> {
		self.ledger.submitted.lock().clone()
	}

	/// Emits a restored session, as the SDK does when a sender reconnects to
	/// a session that is still running on the receiver.
	pub fn restore_session(&self) -> Arc<dyn CastSession> {
		let session: Arc<dyn CastSession> = Arc::new(self.new_session());
		let _ = self.events.send(SdkEvent::SessionRestored(Arc::clone(&session)));
		session
	}

	/// Emits a receiver availability change.
	pub fn announce(&self, availability: ReceiverAvailability) {
		let _ = self.events.send(SdkEvent::ReceiverAvailability(availability));
	}

	fn new_session(&self) -> DryRunSession {
		DryRunSession {
			session_id: Uuid::new_v4().simple().to_string(),
			receiver_name: self.receiver_name.clone(),
			ledger: Arc::clone(&self.ledger),
		}
	}
}

#[async_trait]
impl CastSdk for DryRunSdk {
	fn is_available(&self) -> bool {
		let checks = self.availability_checks.fetch_add(1, Ordering::SeqCst) + 1;
		checks > self.available_after
	}

	async fn initialize(&self, config: &ApiConfig) -> Result<(), SdkError> {
		if let Some(err) = &self.init_failure {
			return Err(err.clone());
		}
		self.initialized.store(true, Ordering::SeqCst);
		debug!(target = "cast", app_id = %config.app_id, "dry-run sdk initialized");
		Ok(())
	}

	async fn request_session(&self) -> Result<Arc<dyn CastSession>, SdkError> {
		if !self.is_initialized() {
			return Err(SdkError::new(SdkErrorCode::ApiNotInitialized));
		}
		if let Some(err) = &self.session_failure {
			return Err(err.clone());
		}
		Ok(Arc::new(self.new_session()))
	}

	fn subscribe(&self) -> broadcast::Receiver<SdkEvent> {
		self.events.subscribe()
	}
}

/// Session handed out by [`DryRunSdk`].
#[derive(Debug)]
pub struct DryRunSession {
	session_id: String,
	receiver_name: String,
	ledger: Arc<Ledger>,
}

impl DryRunSession {
	/// Creates a session not tied to any SDK instance.
	pub fn detached(session_id: impl Into<String>, receiver_name: impl Into<String>) -> Self {
		Self {
			session_id: session_id.into(),
			receiver_name: receiver_name.into(),
			ledger: Arc::new(Ledger::default()),
		}
	}
}

#[async_trait]
impl CastSession for DryRunSession {
	fn session_id(&self) -> &str {
		&self.session_id
	}

	fn receiver_name(&self) -> &str {
		&self.receiver_name
	}

	async fn load_media(&self, request: LoadRequest) -> Result<(), SdkError> {
		if let Some(err) = self.ledger.load_failure.lock().clone() {
			return Err(err);
		}

		let request_id = self.ledger.next_request_id.fetch_add(1, Ordering::SeqCst) + 1;
		let message = LoadMessage::new(request_id, &self.session_id, &request);
		let payload = serde_json::to_string(&message)
			.map_err(|e| SdkError::new(SdkErrorCode::InvalidParameter).with_description(e.to_string()))?;

		info!(target = "cast", namespace = MEDIA_NAMESPACE, receiver = %self.receiver_name, %payload, "dry-run load");
		self.ledger.submitted.lock().push(message);
		Ok(())
	}
}
