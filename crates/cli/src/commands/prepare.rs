use anyhow::anyhow;
use cast_runtime::{MediaPreparer, PrepareRequest};

use super::emit;
use crate::cli::PrepareArgs;
use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{Artifact, ArtifactType};

pub async fn execute(ctx: &CommandContext, command: &str, args: PrepareArgs) -> Result<()> {
	let request = PrepareRequest {
		kind: args.stream_type,
		input_dir: args.input_dir,
		output_dir: args.output_dir,
	};

	// ffmpeg runs are long and blocking
	let prepared = tokio::task::spawn_blocking(move || -> cast_runtime::Result<_> {
		let preparer = MediaPreparer::locate()?;
		preparer.prepare(&request)
	})
	.await
	.map_err(|err| anyhow!("media preparation task failed: {err}"))??;

	let manifest = Artifact::file(ArtifactType::Manifest, &prepared.manifest);
	emit(ctx, command, prepared, vec![manifest]);
	Ok(())
}
