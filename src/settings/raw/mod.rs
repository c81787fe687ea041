use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use quarry::{DEFAULT_PLACEHOLDER, DEFAULT_TIMEOUT, DEFAULT_TITLE, default_seed_endpoint};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource, parse_url};

pub(super) const DEFAULT_ENDPOINT: &str = "http://localhost:5000/search";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
}

/// Where and how requests are sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) endpoint: Option<String>,
	pub(super) seed_endpoint: Option<String>,
	pub(super) timeout_ms: Option<u64>,
}

/// Presentation values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.search.endpoint = Some(endpoint);
		}
		if let Some(endpoint) = cli.seed_endpoint.clone() {
			self.search.seed_endpoint = Some(endpoint);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.search.timeout_ms = Some(timeout);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.search.endpoint.is_some(),
				"QUARRY__SEARCH__ENDPOINT",
				"--endpoint",
				"search.endpoint",
			),
			seed_endpoint: detect_source(
				cli.seed_endpoint.is_some(),
				self.search.seed_endpoint.is_some(),
				"QUARRY__SEARCH__SEED_ENDPOINT",
				"--seed-endpoint",
				"search.seed_endpoint",
			),
			timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.search.timeout_ms.is_some(),
				"QUARRY__SEARCH__TIMEOUT_MS",
				"--timeout-ms",
				"search.timeout_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"QUARRY__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let endpoint = parse_url(
			"search.endpoint",
			self.search.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
			sources.source_for_endpoint(),
		)?;

		let seed_endpoint = match self.search.seed_endpoint.as_deref() {
			Some(value) => parse_url("search.seed_endpoint", value, sources.source_for_seed_endpoint())?,
			None => default_seed_endpoint(&endpoint).ok_or_else(|| {
				ConfigError::invalid(
					"search.seed_endpoint",
					endpoint.to_string(),
					sources.source_for_endpoint(),
					"cannot derive the sample-data endpoint from the search endpoint",
				)
			})?,
		};

		let timeout = self
			.search
			.timeout_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_TIMEOUT);

		let config = ResolvedConfig {
			endpoint,
			seed_endpoint,
			timeout,
			title: self.ui.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
			placeholder: self
				.ui
				.placeholder
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned()),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
