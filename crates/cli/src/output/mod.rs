//! Structured output envelope for all castctl commands.
//!
//! Every command produces a result envelope on stdout:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "ok": true,
//!   "command": "launch",
//!   "data": { ... },
//!   "timings": { "durationMs": 12 }
//! }
//! ```
//!
//! On failure:
//!
//! ```json
//! {
//!   "ok": false,
//!   "command": "launch",
//!   "error": {
//!     "code": "MISSING_SOURCE",
//!     "message": "video source URL is missing in element #sample-video-src",
//!     "details": { "elementId": "sample-video-src" }
//!   }
//! }
//! ```

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Current schema version for command output.
pub const SCHEMA_VERSION: u32 = 1;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// TOON output (default, compact)
	#[default]
	Toon,
	/// Pretty-printed JSON
	Json,
	/// Human-readable text
	Text,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Toon => write!(f, "toon"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Text => write!(f, "text"),
		}
	}
}

/// The result envelope returned by all commands.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub schema_version: Option<u32>,

	pub ok: bool,

	/// Command name (e.g., "launch", "prepare", "config.show")
	pub command: String,

	/// Command-specific result data (only present on success)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	/// Error information (only present on failure)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,

	/// Files written by the command
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub artifacts: Vec<Artifact>,
}

/// Error information for failed commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,

	/// Human-readable error message
	pub message: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// The SDK never became available
	SdkUnavailable,
	/// The SDK rejected initialization
	SdkInitFailed,
	/// Session request rejected or cancelled
	SessionFailed,
	/// Launch attempted without a session
	NoActiveSession,
	/// Player page has no usable media source
	MissingSource,
	/// Receiver rejected the load request
	MediaLoadFailed,
	/// ffmpeg or MP4Box could not be found
	ToolNotFound,
	/// ffmpeg or MP4Box exited unsuccessfully
	ToolFailed,
	/// Preparation produced unusable output
	PrepareFailed,
	/// Config file missing or malformed
	ConfigError,
	/// File I/O error
	IoError,
	/// Invalid input provided
	InvalidInput,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let code = match self {
			ErrorCode::SdkUnavailable => "SDK_UNAVAILABLE",
			ErrorCode::SdkInitFailed => "SDK_INIT_FAILED",
			ErrorCode::SessionFailed => "SESSION_FAILED",
			ErrorCode::NoActiveSession => "NO_ACTIVE_SESSION",
			ErrorCode::MissingSource => "MISSING_SOURCE",
			ErrorCode::MediaLoadFailed => "MEDIA_LOAD_FAILED",
			ErrorCode::ToolNotFound => "TOOL_NOT_FOUND",
			ErrorCode::ToolFailed => "TOOL_FAILED",
			ErrorCode::PrepareFailed => "PREPARE_FAILED",
			ErrorCode::ConfigError => "CONFIG_ERROR",
			ErrorCode::IoError => "IO_ERROR",
			ErrorCode::InvalidInput => "INVALID_INPUT",
			ErrorCode::InternalError => "INTERNAL_ERROR",
		};
		f.write_str(code)
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

/// File produced by a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
	#[serde(rename = "type")]
	pub artifact_type: ArtifactType,

	pub path: PathBuf,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub size_bytes: Option<u64>,
}

impl Artifact {
	/// Describes a file already on disk, picking up its size when readable.
	pub fn file(artifact_type: ArtifactType, path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let size_bytes = std::fs::metadata(&path).ok().map(|meta| meta.len());
		Self {
			artifact_type,
			path,
			size_bytes,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
	Page,
	Manifest,
	Config,
}

/// Builder for constructing command results
pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
	artifacts: Vec<Artifact>,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
			artifacts: Vec::new(),
		}
	}

	/// Set the successful result data
	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error_with_details(
		mut self,
		code: ErrorCode,
		message: impl Into<String>,
		details: Option<serde_json::Value>,
	) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details,
		});
		self
	}

	pub fn artifact(mut self, artifact: Artifact) -> Self {
		self.artifacts.push(artifact);
		self
	}

	/// Build the final result
	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();

		CommandResult {
			schema_version: Some(SCHEMA_VERSION),
			ok,
			command: self.command,
			data: self.data,
			error: self.error,
			timings: Some(Timings::from(self.start_time.elapsed())),
			artifacts: self.artifacts,
		}
	}
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Toon => {
			if let Ok(json_value) = serde_json::to_value(result) {
				println!("{}", toon::encode(&json_value, None));
			}
		}
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => print_result_text(result),
	}
}

fn print_result_text<T: Serialize>(result: &CommandResult<T>) {
	let mut stdout = io::stdout().lock();

	if result.ok {
		if let Some(ref data) = result.data {
			if let Ok(json) = serde_json::to_string_pretty(data) {
				let _ = writeln!(stdout, "{json}");
			}
		}
	} else if let Some(ref error) = result.error {
		let _ = writeln!(stdout, "Error [{}]: {}", error.code, error.message);
	}

	for artifact in &result.artifacts {
		let _ = writeln!(stdout, "Wrote {:?}: {}", artifact.artifact_type, artifact.path.display());
	}
}

/// Print an error to stderr in human-readable format
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

/// Result data for the resolve command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveData {
	pub scan: cast::ExtensionScan,
	pub resolved: Vec<ResolvedUrl>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUrl {
	pub url: String,
	pub content_type: String,
}

/// Result data for the launch command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchData {
	pub receiver: String,
	pub session_id: String,
	pub app_id: String,
	pub content_id: String,
	pub content_type: String,
	/// Messages as they were handed to the session
	pub messages: Vec<cast::LoadMessage>,
}

/// Result data for the demo-page command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoPageData {
	pub kind: String,
	pub media_url: String,
	pub content_type: String,
	/// Rendered HTML, omitted when written to a file
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<PathBuf>,
}

/// Result data for the config commands.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
	pub path: PathBuf,
	pub exists: bool,
	pub config: crate::config::CastConfig,
}
