use cast_cli::{
	cli::Cli,
	commands,
	error::CliError,
	logging,
	output::{self, OutputFormat, ResultBuilder},
};
use clap::Parser;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli).await {
		handle_error(command, err, format);
		std::process::exit(1);
	}
}

fn handle_error(command: &'static str, err: CliError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Humans always get stderr
	output::print_error_stderr(&cmd_error);

	// Machine formats also get an ok=false envelope on stdout
	if format != OutputFormat::Text {
		let result: output::CommandResult<()> = ResultBuilder::new(command)
			.error_with_details(cmd_error.code, &cmd_error.message, cmd_error.details)
			.build();
		output::print_result(&result, format);
	}
}
