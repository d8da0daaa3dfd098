//! Error types for media preparation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for preparation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// An external tool could not be located.
	#[error("{tool} not found. Install it or point {env_var} at the executable")]
	ToolNotFound { tool: &'static str, env_var: &'static str },

	/// An external tool ran but exited unsuccessfully.
	#[error("{tool} failed ({status}): {stderr}")]
	ToolFailed { tool: &'static str, status: String, stderr: String },

	/// Stream type outside `simple`, `dash`, `hls`.
	#[error("invalid stream type '{0}': streaming type must be simple, dash, or hls")]
	InvalidStreamType(String),

	/// A required parameter was empty.
	#[error("invalid parameters: {0} must not be empty")]
	InvalidParameter(&'static str),

	/// No `*.mp4` inputs were found.
	#[error("no input videos (*.mp4) found in {}", .0.display())]
	NoInput(PathBuf),

	/// A generated media playlist could not be read.
	#[error("malformed playlist {}: {reason}", .path.display())]
	Playlist { path: PathBuf, reason: String },

	#[error("invalid input pattern: {0}")]
	Pattern(#[from] glob::PatternError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
