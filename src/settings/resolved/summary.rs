use std::io::{self, Write};

use super::ResolvedConfig;

pub(super) fn write_summary(config: &ResolvedConfig, out: &mut impl Write) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	writeln!(out, "  Endpoint: {}", config.endpoint)?;
	writeln!(out, "  Seed endpoint: {}", config.seed_endpoint)?;
	writeln!(out, "  Timeout: {} ms", config.timeout.as_millis())?;
	writeln!(out, "  Title: {}", config.title)?;
	writeln!(out, "  Placeholder: {}", config.placeholder)?;
	if !config.initial_query.is_empty() {
		writeln!(out, "  Initial query: {}", config.initial_query)?;
	}
	writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	)
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use quarry::Url;

	use super::*;

	fn config() -> ResolvedConfig {
		let endpoint = Url::parse("http://localhost:5000/search").unwrap();
		ResolvedConfig {
			seed_endpoint: endpoint.join("add_sample_data").unwrap(),
			endpoint,
			timeout: Duration::from_millis(500),
			title: "Title".into(),
			placeholder: "Type".into(),
			initial_query: "foo".into(),
			theme: Some("light".into()),
		}
	}

	fn render(config: &ResolvedConfig) -> String {
		let mut out = Vec::new();
		write_summary(config, &mut out).expect("written");
		String::from_utf8(out).expect("utf8")
	}

	#[test]
	fn summary_lists_every_effective_value() {
		let text = render(&config());

		assert_eq!(
			text.lines().collect::<Vec<_>>(),
			vec![
				"Effective configuration:",
				"  Endpoint: http://localhost:5000/search",
				"  Seed endpoint: http://localhost:5000/add_sample_data",
				"  Timeout: 500 ms",
				"  Title: Title",
				"  Placeholder: Type",
				"  Initial query: foo",
				"  UI theme: light",
			]
		);
	}

	#[test]
	fn summary_omits_empty_query_and_names_default_theme() {
		let text = render(&ResolvedConfig {
			initial_query: String::new(),
			theme: None,
			..config()
		});

		assert!(!text.contains("Initial query"));
		assert!(text.contains("  UI theme: (use the library default)\n"));
	}
}
