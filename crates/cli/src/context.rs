//! Shared context handed to every castctl command.

use std::path::{Path, PathBuf};

use crate::config::{self, CastConfig};
use crate::error::Result;
use crate::output::OutputFormat;

#[derive(Debug, Clone)]
pub struct CommandContext {
	config: CastConfig,
	config_path: PathBuf,
	config_exists: bool,
	format: OutputFormat,
}

impl CommandContext {
	/// Loads the config from `explicit` or the default location.
	pub fn load(explicit: Option<&Path>, format: OutputFormat) -> Result<Self> {
		let config_path = explicit.map(Path::to_path_buf).unwrap_or_else(config::default_path);
		let config = CastConfig::load(&config_path)?;
		let config_exists = config_path.is_file();
		Ok(Self {
			config,
			config_path,
			config_exists,
			format,
		})
	}

	pub fn config(&self) -> &CastConfig {
		&self.config
	}

	pub fn config_path(&self) -> &Path {
		&self.config_path
	}

	pub fn config_exists(&self) -> bool {
		self.config_exists
	}

	pub fn format(&self) -> OutputFormat {
		self.format
	}
}
