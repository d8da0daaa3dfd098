use cast::{ContentTypeResolver, ExtensionScan};

use super::emit;
use crate::cli::ResolveArgs;
use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{ResolveData, ResolvedUrl};

pub fn execute(ctx: &CommandContext, command: &str, args: ResolveArgs) -> Result<()> {
	let scan = if args.verbatim {
		ExtensionScan::Verbatim
	} else {
		ctx.config().extension_scan
	};
	let resolver = ContentTypeResolver::new(scan);

	let resolved = args
		.urls
		.into_iter()
		.map(|url| ResolvedUrl {
			content_type: resolver.resolve(&url).to_string(),
			url,
		})
		.collect();

	emit(ctx, command, ResolveData { scan, resolved }, Vec::new());
	Ok(())
}
