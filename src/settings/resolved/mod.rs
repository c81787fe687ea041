use std::io;
use std::time::Duration;

use quarry::Url;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::parse_url;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub endpoint: Url,
	pub seed_endpoint: Url,
	pub timeout: Duration,
	pub title: String,
	pub placeholder: String,
	pub initial_query: String,
	pub theme: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) -> io::Result<()> {
		summary::write_summary(self, &mut io::stdout().lock())
	}
}
