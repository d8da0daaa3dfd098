//! On-disk castctl configuration.
//!
//! Lives at `$XDG_CONFIG_HOME/castctl/config.json` unless `--config` points
//! elsewhere. Every key is optional; absent keys take the sender defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cast::options::{DEFAULT_APP_ID, DEFAULT_MAX_POLLS, DEFAULT_POLL_INTERVAL};
use cast::page::DEFAULT_SOURCE_ELEMENT_ID;
use cast::{ExtensionScan, SenderOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::demo::DEFAULT_DEMO_BASE_URL;
use crate::error::{CliError, Result};

/// Schema version written into new config files.
pub const SCHEMA_VERSION: u32 = 1;

const CONFIG_DIR: &str = "castctl";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CastConfig {
	pub schema: u32,
	pub app_id: String,
	pub source_element_id: String,
	pub poll_interval_ms: u64,
	pub max_polls: u32,
	pub extension_scan: ExtensionScan,
	pub demo_base_url: String,
}

impl Default for CastConfig {
	fn default() -> Self {
		Self {
			schema: SCHEMA_VERSION,
			app_id: DEFAULT_APP_ID.to_string(),
			source_element_id: DEFAULT_SOURCE_ELEMENT_ID.to_string(),
			poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
			max_polls: DEFAULT_MAX_POLLS,
			extension_scan: ExtensionScan::default(),
			demo_base_url: DEFAULT_DEMO_BASE_URL.to_string(),
		}
	}
}

impl CastConfig {
	/// Sender settings derived from this config.
	pub fn sender_options(&self) -> SenderOptions {
		SenderOptions::default()
			.with_app_id(self.app_id.clone())
			.with_source_element_id(self.source_element_id.clone())
			.with_poll_interval(Duration::from_millis(self.poll_interval_ms))
			.with_max_polls(self.max_polls)
			.with_extension_scan(self.extension_scan)
	}

	/// Loads the config at `path`.
	///
	/// A missing file yields defaults. A file that exists but does not parse is
	/// an error rather than being silently ignored.
	pub fn load(path: &Path) -> Result<Self> {
		let content = match fs::read_to_string(path) {
			Ok(content) => content,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				debug!(target = "cast", path = %path.display(), "no config file; using defaults");
				return Ok(Self::default());
			}
			Err(err) => {
				return Err(CliError::Config {
					path: path.to_path_buf(),
					message: err.to_string(),
				});
			}
		};

		let config: Self = serde_json::from_str(&content).map_err(|err| CliError::Config {
			path: path.to_path_buf(),
			message: err.to_string(),
		})?;

		if config.schema > SCHEMA_VERSION {
			return Err(CliError::Config {
				path: path.to_path_buf(),
				message: format!("schema {} is newer than supported ({SCHEMA_VERSION})", config.schema),
			});
		}

		Ok(config)
	}

	pub fn save(&self, path: &Path) -> Result<()> {
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(path, serde_json::to_string_pretty(self)?)?;
		Ok(())
	}
}

/// Default config location.
///
/// `$XDG_CONFIG_HOME` wins when set, then the platform config directory.
pub fn default_path() -> PathBuf {
	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.or_else(dirs::config_dir)
		.unwrap_or_else(|| PathBuf::from("."));

	config_home.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_yields_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let config = CastConfig::load(&dir.path().join("absent.json")).unwrap();
		assert_eq!(config, CastConfig::default());
		assert_eq!(config.app_id, "90CA4506");
		assert_eq!(config.poll_interval_ms, 1000);
		assert_eq!(config.max_polls, 10);
	}

	#[test]
	fn partial_file_fills_in_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");
		fs::write(&path, r#"{ "appId": "ABCD1234", "extensionScan": "verbatim" }"#).unwrap();

		let config = CastConfig::load(&path).unwrap();
		assert_eq!(config.app_id, "ABCD1234");
		assert_eq!(config.extension_scan, ExtensionScan::Verbatim);
		assert_eq!(config.source_element_id, "sample-video-src");
		assert_eq!(config.demo_base_url, "http://app.localhost:8000/streamer/");
	}

	#[test]
	fn malformed_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");
		fs::write(&path, "{ not json").unwrap();

		let err = CastConfig::load(&path).unwrap_err();
		assert!(matches!(err, CliError::Config { .. }));
	}

	#[test]
	fn newer_schema_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");
		fs::write(&path, r#"{ "schema": 99 }"#).unwrap();

		assert!(CastConfig::load(&path).is_err());
	}

	#[test]
	fn save_then_load() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("config.json");
		let config = CastConfig {
			max_polls: 3,
			poll_interval_ms: 50,
			..CastConfig::default()
		};

		config.save(&path).unwrap();
		let raw = fs::read_to_string(&path).unwrap();
		assert!(raw.contains("\"pollIntervalMs\": 50"));
		assert_eq!(CastConfig::load(&path).unwrap(), config);
	}

	#[test]
	fn sender_options_follow_config() {
		let config = CastConfig {
			app_id: "FEED0001".into(),
			poll_interval_ms: 250,
			max_polls: 4,
			extension_scan: ExtensionScan::Verbatim,
			source_element_id: "player-src".into(),
			..CastConfig::default()
		};
		let options = config.sender_options();
		assert_eq!(options.app_id, "FEED0001");
		assert_eq!(options.poll_interval, Duration::from_millis(250));
		assert_eq!(options.max_polls, 4);
		assert_eq!(options.extension_scan, ExtensionScan::Verbatim);
		assert_eq!(options.source_element_id, "player-src");
	}

	#[test]
	fn default_path_ends_in_castctl_config() {
		assert!(default_path().ends_with("castctl/config.json"));
	}
}
