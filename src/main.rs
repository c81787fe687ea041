mod cli;
mod settings;
mod workflow;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, RunMode, parse_cli, print_json, print_plain};
use quarry::SearchOutcome;
use quarry::logging::{self, LogTarget};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in quarry::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let mode = cli.run_mode();
	init_logging(mode)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary()?;
	}

	let workflow = SearchWorkflow::from_config(resolved)?;
	match mode {
		RunMode::Seed => {
			println!("{}", workflow.seed()?);
			Ok(())
		}
		RunMode::Batch => {
			let outcome = workflow.run_batch()?;
			report(&cli, &outcome)?;
			if outcome.error.is_some() {
				std::process::exit(1);
			}
			Ok(())
		}
		RunMode::Interactive => {
			let outcome = workflow.run()?;
			report(&cli, &outcome)
		}
	}
}

fn init_logging(mode: RunMode) -> Result<()> {
	let log_file = match mode {
		RunMode::Interactive => logging::default_log_file(),
		RunMode::Batch | RunMode::Seed => Ok(PathBuf::new()),
	};
	match log_target(mode, log_file, &mut io::stderr())? {
		Some(target) => logging::initialize(target),
		None => Ok(()),
	}
}

/// The interactive form owns the terminal, so its logs go to a file. Without
/// a usable cache directory logging is switched off and `notes` says so.
fn log_target(
	mode: RunMode,
	log_file: Result<PathBuf>,
	notes: &mut impl Write,
) -> io::Result<Option<LogTarget>> {
	match mode {
		RunMode::Batch | RunMode::Seed => Ok(Some(LogTarget::Stderr)),
		RunMode::Interactive => match log_file {
			Ok(path) => Ok(Some(LogTarget::File(path))),
			Err(err) => {
				writeln!(notes, "quarry: logging disabled, no log file available ({err})")?;
				Ok(None)
			}
		},
	}
}

/// Print the outcome in the chosen format.
fn report(cli: &CliArgs, outcome: &SearchOutcome) -> Result<()> {
	match cli.output {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
