use cast::content_type::content_type_for;

use super::emit;
use crate::cli::DemoPageArgs;
use crate::context::CommandContext;
use crate::demo;
use crate::error::Result;
use crate::output::{Artifact, ArtifactType, DemoPageData};

pub fn execute(ctx: &CommandContext, command: &str, args: DemoPageArgs) -> Result<()> {
	let base_url = args.base_url.as_deref().unwrap_or(&ctx.config().demo_base_url);
	let media_url = demo::demo_media_url(base_url, args.kind)?;
	let title = format!("Cast demo ({})", args.kind);
	let html = demo::render_player_page(&title, &ctx.config().source_element_id, &media_url);

	let mut artifacts = Vec::new();
	let (html, path) = match args.out {
		Some(path) => {
			if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
				std::fs::create_dir_all(parent)?;
			}
			std::fs::write(&path, &html)?;
			artifacts.push(Artifact::file(ArtifactType::Page, &path));
			(None, Some(path))
		}
		None => (Some(html), None),
	};

	let data = DemoPageData {
		kind: args.kind.to_string(),
		content_type: content_type_for(&media_url).to_string(),
		media_url,
		html,
		path,
	};
	emit(ctx, command, data, artifacts);
	Ok(())
}
