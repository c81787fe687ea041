use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use quarry::app_dirs;

/// Produce the full version banner including the config and cache directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let cache_dir = match app_dirs::get_cache_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("quarry {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "cache directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "quarry",
	version,
	long_version = long_version(),
	about = "Search form for a remote search endpoint",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `quarry` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QUARRY_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Search endpoint receiving the POST request (default: http://localhost:5000/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "seed-endpoint",
		value_name = "URL",
		help = "Sample-data endpoint used by --seed (default: add_sample_data next to the endpoint)"
	)]
	pub(crate) seed_endpoint: Option<String>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Abort a request after this many milliseconds (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the heading shown above the form (default: Search Application)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the input placeholder (default: Enter your search query...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'b',
		long,
		conflicts_with = "seed",
		help = "Run the initial query once without the interface and print the results (default: disabled)"
	)]
	pub(crate) batch: bool,
	#[arg(
		long,
		help = "Ask the backend to insert its sample documents and exit (default: disabled)"
	)]
	pub(crate) seed: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	pub(crate) fn run_mode(&self) -> RunMode {
		if self.seed {
			RunMode::Seed
		} else if self.batch {
			RunMode::Batch
		} else {
			RunMode::Interactive
		}
	}
}

/// What the binary does after configuration is resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RunMode {
	Interactive,
	Batch,
	Seed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
