use std::time::Duration;

use crate::content_type::ExtensionScan;
use crate::page::DEFAULT_SOURCE_ELEMENT_ID;

/// Receiver application launched by the demo sender.
pub const DEFAULT_APP_ID: &str = "90CA4506";
/// Delay between SDK availability checks at startup.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);
/// Availability checks before startup gives up.
pub const DEFAULT_MAX_POLLS: u32 = 10;

/// Settings for a [`CastController`](crate::CastController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderOptions {
	/// Receiver application id passed to the SDK.
	pub app_id: String,
	/// Delay between availability checks.
	pub poll_interval: Duration,
	/// Upper bound on availability checks; values below 1 behave as 1.
	pub max_polls: u32,
	/// How content types are read from media URLs.
	pub extension_scan: ExtensionScan,
	/// Id of the page element holding the media `<source>`.
	pub source_element_id: String,
}

impl Default for SenderOptions {
	fn default() -> Self {
		Self {
			app_id: DEFAULT_APP_ID.to_string(),
			poll_interval: DEFAULT_POLL_INTERVAL,
			max_polls: DEFAULT_MAX_POLLS,
			extension_scan: ExtensionScan::default(),
			source_element_id: DEFAULT_SOURCE_ELEMENT_ID.to_string(),
		}
	}
}

impl SenderOptions {
	pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
		self.app_id = app_id.into();
		self
	}

	pub fn with_poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = interval;
		self
	}

	pub fn with_max_polls(mut self, max_polls: u32) -> Self {
		self.max_polls = max_polls;
		self
	}

	pub fn with_extension_scan(mut self, scan: ExtensionScan) -> Self {
		self.extension_scan = scan;
		self
	}

	pub fn with_source_element_id(mut self, id: impl Into<String>) -> Self {
		self.source_element_id = id.into();
		self
	}
}
