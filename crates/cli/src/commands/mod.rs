mod config;
mod demo_page;
mod launch;
mod prepare;
mod resolve;

use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{self, Artifact, ResultBuilder};

pub async fn dispatch(cli: Cli) -> Result<()> {
	let ctx = CommandContext::load(cli.config.as_deref(), cli.format)?;
	let command = cli.command.name();

	match cli.command {
		Commands::Resolve(args) => resolve::execute(&ctx, command, args),
		Commands::Launch(args) => launch::execute(&ctx, command, args).await,
		Commands::DemoPage(args) => demo_page::execute(&ctx, command, args),
		Commands::Prepare(args) => prepare::execute(&ctx, command, args).await,
		Commands::Config(action) => config::execute(&ctx, command, action),
	}
}

/// Prints a successful envelope for `command`.
pub(crate) fn emit<T: Serialize>(ctx: &CommandContext, command: &str, data: T, artifacts: Vec<Artifact>) {
	let result = artifacts
		.into_iter()
		.fold(ResultBuilder::new(command).data(data), ResultBuilder::artifact)
		.build();
	output::print_result(&result, ctx.format());
}
