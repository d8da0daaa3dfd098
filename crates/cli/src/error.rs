use std::path::PathBuf;

use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Cast(#[from] cast::Error),

	#[error(transparent)]
	Prepare(#[from] cast_runtime::Error),

	#[error("config {}: {message}", .path.display())]
	Config { path: PathBuf, message: String },

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("cannot read page {}", .path.display())]
	PageRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl CliError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			CliError::Cast(err) => cast_error_code(err),
			CliError::Prepare(err) => prepare_error_code(err),
			CliError::Config { path, message } => (
				ErrorCode::ConfigError,
				format!("Config {}: {message}", path.display()),
				Some(serde_json::json!({ "path": path })),
			),
			CliError::InvalidInput(msg) => (ErrorCode::InvalidInput, msg.clone(), None),
			CliError::PageRead { path, source } => (
				ErrorCode::IoError,
				format!("Cannot read page {}: {source}", path.display()),
				Some(serde_json::json!({ "path": path })),
			),
			CliError::Io(err) => (ErrorCode::IoError, err.to_string(), None),
			CliError::Json(err) => (ErrorCode::InternalError, format!("JSON error: {err}"), None),
			CliError::Anyhow(err) => (ErrorCode::InternalError, err.to_string(), None),
		};

		CommandError { code, message, details }
	}
}

fn cast_error_code(err: &cast::Error) -> (ErrorCode, String, Option<serde_json::Value>) {
	let message = err.to_string();
	match err {
		cast::Error::SdkUnavailable { attempts } => (
			ErrorCode::SdkUnavailable,
			message,
			Some(serde_json::json!({ "attempts": attempts })),
		),
		cast::Error::Initialization(sdk) => (ErrorCode::SdkInitFailed, message, Some(sdk_details(sdk))),
		cast::Error::SessionRequest(sdk) => (ErrorCode::SessionFailed, message, Some(sdk_details(sdk))),
		cast::Error::NoActiveSession => (ErrorCode::NoActiveSession, message, None),
		cast::Error::MissingSource { element_id } => (
			ErrorCode::MissingSource,
			message,
			Some(serde_json::json!({ "elementId": element_id })),
		),
		cast::Error::MediaLoad(sdk) => (ErrorCode::MediaLoadFailed, message, Some(sdk_details(sdk))),
	}
}

fn sdk_details(err: &cast::SdkError) -> serde_json::Value {
	serde_json::json!({ "sdkCode": err.code, "description": err.description })
}

fn prepare_error_code(err: &cast_runtime::Error) -> (ErrorCode, String, Option<serde_json::Value>) {
	use cast_runtime::Error;

	let message = err.to_string();
	match err {
		Error::ToolNotFound { tool, env_var } => (
			ErrorCode::ToolNotFound,
			message,
			Some(serde_json::json!({ "tool": tool, "envVar": env_var })),
		),
		Error::ToolFailed { tool, status, .. } => (
			ErrorCode::ToolFailed,
			message,
			Some(serde_json::json!({ "tool": tool, "status": status })),
		),
		Error::InvalidStreamType(_) | Error::InvalidParameter(_) => (ErrorCode::InvalidInput, message, None),
		Error::NoInput(dir) => (ErrorCode::InvalidInput, message, Some(serde_json::json!({ "inputDir": dir }))),
		Error::Playlist { path, .. } => (ErrorCode::PrepareFailed, message, Some(serde_json::json!({ "path": path }))),
		Error::Pattern(_) => (ErrorCode::InvalidInput, message, None),
		Error::Io(_) => (ErrorCode::IoError, message, None),
	}
}
