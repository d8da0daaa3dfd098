use super::emit;
use crate::cli::ConfigAction;
use crate::config::CastConfig;
use crate::context::CommandContext;
use crate::error::{CliError, Result};
use crate::output::{Artifact, ArtifactType, ConfigData};

pub fn execute(ctx: &CommandContext, command: &str, action: ConfigAction) -> Result<()> {
	match action {
		ConfigAction::Show => {
			let data = ConfigData {
				path: ctx.config_path().to_path_buf(),
				exists: ctx.config_exists(),
				config: ctx.config().clone(),
			};
			emit(ctx, command, data, Vec::new());
		}
		ConfigAction::Init { force } => {
			let path = ctx.config_path();
			if ctx.config_exists() && !force {
				return Err(CliError::Config {
					path: path.to_path_buf(),
					message: "already exists (use --force to overwrite)".into(),
				});
			}

			let config = CastConfig::default();
			config.save(path)?;
			let data = ConfigData {
				path: path.to_path_buf(),
				exists: true,
				config,
			};
			emit(ctx, command, data, vec![Artifact::file(ArtifactType::Config, path)]);
		}
	}
	Ok(())
}
