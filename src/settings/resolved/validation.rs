use quarry::Url;
use quarry::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Parse an absolute `http`/`https` URL.
pub(crate) fn parse_url(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<Url, ConfigError> {
	let url = Url::parse(value.trim())
		.map_err(|err| ConfigError::invalid(key, value, origin.clone(), err.to_string()))?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		other => Err(ConfigError::invalid(
			key,
			value,
			origin,
			format!("unsupported scheme `{other}`, expected http or https"),
		)),
	}
}

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"search.timeout_ms",
			config.timeout.as_millis().to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name.as_str(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of {}", theme::names().join(", ")),
		));
	}

	Ok(())
}
