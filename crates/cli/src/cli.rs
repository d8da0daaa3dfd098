use std::path::PathBuf;

use cast_runtime::StreamKind;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "castctl")]
#[command(about = "Cast sender - launch media on a receiver from the command line")]
#[command(version)]
#[command(styles = help_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: toon (default), json, or text
	#[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Toon)]
	pub format: OutputFormat,

	/// Config file (default: $XDG_CONFIG_HOME/castctl/config.json)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Print the content type a receiver would be given for each URL
	Resolve(ResolveArgs),

	/// Start a session and load a media URL on the receiver
	Launch(LaunchArgs),

	/// Render a player page pointing at one of the demo streams
	#[command(name = "demo-page")]
	DemoPage(DemoPageArgs),

	/// Transcode and package source videos into a castable layout
	Prepare(PrepareArgs),

	/// Inspect or create the config file
	#[command(subcommand)]
	Config(ConfigAction),
}

impl Commands {
	/// Command name used in result envelopes.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Resolve(_) => "resolve",
			Commands::Launch(_) => "launch",
			Commands::DemoPage(_) => "demo-page",
			Commands::Prepare(_) => "prepare",
			Commands::Config(ConfigAction::Show) => "config.show",
			Commands::Config(ConfigAction::Init { .. }) => "config.init",
		}
	}
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
	/// Media URLs
	#[arg(required = true, value_name = "URL")]
	pub urls: Vec<String>,

	/// Read the extension from the raw URL, query string included
	#[arg(long)]
	pub verbatim: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
	/// Player page to read the media source from
	#[arg(long, value_name = "FILE", conflicts_with = "url", required_unless_present = "url")]
	pub page: Option<PathBuf>,

	/// Media URL to launch directly
	#[arg(long, short = 'u', value_name = "URL")]
	pub url: Option<String>,

	/// Receiver name reported by the dry-run SDK
	#[arg(long, value_name = "NAME")]
	pub receiver: Option<String>,

	/// Receiver application id
	#[arg(long, value_name = "ID")]
	pub app_id: Option<String>,

	/// Id of the page element holding the <source>
	#[arg(long, value_name = "ID")]
	pub element_id: Option<String>,

	/// Read the extension from the raw URL, query string included
	#[arg(long)]
	pub verbatim: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DemoPageArgs {
	/// Stream layout: simple, dash, or hls
	#[arg(value_name = "KIND")]
	pub kind: StreamKind,

	/// Write the page here instead of including it in the output
	#[arg(long, short = 'o', value_name = "FILE")]
	pub out: Option<PathBuf>,

	/// Base URL the demo streams are served from
	#[arg(long, value_name = "URL")]
	pub base_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PrepareArgs {
	/// Stream layout: simple, dash, or hls
	#[arg(long, value_name = "KIND")]
	pub stream_type: StreamKind,

	/// Directory holding the source *.mp4 files
	#[arg(long, value_name = "DIR")]
	pub input_dir: PathBuf,

	/// Directory the prepared stream is written under
	#[arg(long, value_name = "DIR")]
	pub output_dir: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
	/// Print the effective configuration
	Show,

	/// Write a config file populated with defaults
	Init {
		/// Overwrite an existing file
		#[arg(long)]
		force: bool,
	},
}

/// Cargo-like help colors.
fn help_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn verify_cli() {
		Cli::command().debug_assert();
	}

	#[test]
	fn launch_requires_page_or_url() {
		assert!(Cli::try_parse_from(["castctl", "launch"]).is_err());
		assert!(Cli::try_parse_from(["castctl", "launch", "--page", "p.html", "--url", "http://h/a.mp4"]).is_err());

		let cli = Cli::try_parse_from(["castctl", "launch", "-u", "http://h/a.mpd"]).unwrap();
		match cli.command {
			Commands::Launch(args) => assert_eq!(args.url.as_deref(), Some("http://h/a.mpd")),
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn stream_kind_arguments_parse() {
		let cli = Cli::try_parse_from(["castctl", "-f", "json", "demo-page", "hls"]).unwrap();
		assert_eq!(cli.format, OutputFormat::Json);
		match cli.command {
			Commands::DemoPage(args) => assert_eq!(args.kind, StreamKind::Hls),
			other => panic!("unexpected command: {other:?}"),
		}

		assert!(
			Cli::try_parse_from(["castctl", "prepare", "--stream-type", "rtmp", "--input-dir", "i", "--output-dir", "o"]).is_err()
		);
	}

	#[test]
	fn command_names() {
		let cli = Cli::try_parse_from(["castctl", "config", "init", "--force"]).unwrap();
		assert_eq!(cli.command.name(), "config.init");
		let cli = Cli::try_parse_from(["castctl", "resolve", "a.mpd"]).unwrap();
		assert_eq!(cli.command.name(), "resolve");
	}
}
