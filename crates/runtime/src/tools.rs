//! Locating and running external media tools.
//!
//! A tool is looked up in this order:
//! 1. Its environment override (`CAST_FFMPEG`, `CAST_MP4BOX`)
//! 2. `PATH`

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Name and override variable of an external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
	pub name: &'static str,
	pub env_var: &'static str,
}

pub const FFMPEG: ToolSpec = ToolSpec {
	name: "ffmpeg",
	env_var: "CAST_FFMPEG",
};

pub const MP4BOX: ToolSpec = ToolSpec {
	name: "MP4Box",
	env_var: "CAST_MP4BOX",
};

/// A located executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
	name: &'static str,
	path: PathBuf,
}

impl Tool {
	pub fn new(name: &'static str, path: impl Into<PathBuf>) -> Self {
		Self { name, path: path.into() }
	}

	/// Finds `spec` via its environment override, falling back to `PATH`.
	pub fn locate(spec: ToolSpec) -> Result<Self> {
		if let Some(path) = std::env::var_os(spec.env_var).map(PathBuf::from) {
			if path.is_file() {
				debug!(target = "cast", tool = spec.name, path = %path.display(), "using tool override");
				return Ok(Self::new(spec.name, path));
			}
			warn!(
				target = "cast",
				tool = spec.name,
				env_var = spec.env_var,
				path = %path.display(),
				"tool override does not exist; searching PATH"
			);
		}

		which::which(spec.name).map(|path| Self::new(spec.name, path)).map_err(|_| Error::ToolNotFound {
			tool: spec.name,
			env_var: spec.env_var,
		})
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Runs the tool to completion, failing on a non-zero exit.
	pub fn run<I, S>(&self, args: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<OsStr>,
	{
		let args: Vec<S> = args.into_iter().collect();
		let command_line = std::iter::once(self.path.as_os_str())
			.chain(args.iter().map(|arg| arg.as_ref()))
			.map(|part| part.to_string_lossy())
			.collect::<Vec<_>>()
			.join(" ");
		info!(target = "cast", tool = self.name, command = %command_line, "running");

		let output = Command::new(&self.path).args(&args).output()?;
		if output.status.success() {
			return Ok(());
		}

		Err(Error::ToolFailed {
			tool: self.name,
			status: output.status.to_string(),
			stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_tool_reports_override_variable() {
		let spec = ToolSpec {
			name: "cast-runtime-no-such-tool",
			env_var: "CAST_RUNTIME_NO_SUCH_TOOL",
		};
		let err = Tool::locate(spec).unwrap_err();
		assert!(matches!(
			err,
			Error::ToolNotFound {
				tool: "cast-runtime-no-such-tool",
				env_var: "CAST_RUNTIME_NO_SUCH_TOOL"
			}
		));
		assert!(err.to_string().contains("CAST_RUNTIME_NO_SUCH_TOOL"));
	}

	#[test]
	fn missing_executable_is_an_io_error() {
		let tool = Tool::new("ffmpeg", "/nonexistent/cast-runtime/ffmpeg");
		assert!(matches!(tool.run(["-version"]), Err(Error::Io(_))));
	}
}
