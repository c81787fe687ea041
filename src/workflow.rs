use std::time::Duration;

use anyhow::{Result, bail};
use quarry::{HttpSearchClient, SearchOutcome, SearchUi};

use crate::settings::ResolvedConfig;

/// Extra time granted to the worker beyond the HTTP timeout before a batch
/// run gives up waiting.
const SETTLE_MARGIN: Duration = Duration::from_secs(1);

/// Coordinates building and running the search experience.
pub(crate) struct SearchWorkflow {
	client: HttpSearchClient,
	search_ui: SearchUi,
	timeout: Duration,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let timeout = config.timeout;
		let client = HttpSearchClient::new(config.endpoint.clone(), timeout)?
			.with_seed_endpoint(config.seed_endpoint.clone());
		let search_ui = SearchUiFactory::build(client.clone(), config)?;
		Ok(Self {
			client,
			search_ui,
			timeout,
		})
	}

	/// Run the interactive form until the user leaves it.
	pub(crate) fn run(self) -> Result<SearchOutcome> {
		tracing::info!(endpoint = %self.client.endpoint(), "starting interactive search");
		self.search_ui.run()
	}

	/// Submit the configured query once and wait for it to resolve.
	pub(crate) fn run_batch(self) -> Result<SearchOutcome> {
		let mut view = self.search_ui.build();
		if !view.on_submit() {
			bail!("batch mode needs a non-blank query (pass --query)");
		}

		if !view.settle(self.timeout + SETTLE_MARGIN) {
			bail!(
				"no response from {} within {} ms",
				self.client.endpoint(),
				self.timeout.as_millis()
			);
		}

		Ok(view.outcome())
	}

	/// Ask the backend to insert its sample documents.
	pub(crate) fn seed(&self) -> Result<String> {
		Ok(self.client.seed_sample_data()?)
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(client: HttpSearchClient, config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			title,
			placeholder,
			initial_query,
			theme,
			..
		} = config;

		let builder = Self::new(client)
			.with_title(title)
			.with_placeholder(placeholder)
			.with_initial_query(initial_query)
			.with_theme(theme)?;

		Ok(builder.finish())
	}

	fn new(client: HttpSearchClient) -> Self {
		Self {
			search_ui: SearchUi::new(client),
		}
	}

	fn with_title(mut self, title: String) -> Self {
		self.search_ui = self.search_ui.with_title(title);
		self
	}

	fn with_placeholder(mut self, placeholder: String) -> Self {
		self.search_ui = self.search_ui.with_placeholder(placeholder);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Result<Self> {
		if let Some(theme) = theme {
			self.search_ui = self.search_ui.with_theme_name(&theme)?;
		}
		Ok(self)
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}

#[cfg(test)]
mod tests {
	use quarry::Url;

	use super::*;

	fn config(query: &str) -> ResolvedConfig {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		drop(listener);

		let endpoint = Url::parse(&format!("http://{addr}/search")).unwrap();
		ResolvedConfig {
			seed_endpoint: endpoint.join("add_sample_data").unwrap(),
			endpoint,
			timeout: Duration::from_millis(500),
			title: "Title".into(),
			placeholder: "Type".into(),
			initial_query: query.into(),
			theme: Some("light".into()),
		}
	}

	#[test]
	fn batch_rejects_blank_query() {
		let workflow = SearchWorkflow::from_config(config("  ")).expect("workflow");
		assert!(workflow.run_batch().is_err());
	}

	#[test]
	fn batch_reports_unreachable_endpoint_as_error_outcome() {
		let workflow = SearchWorkflow::from_config(config("rust")).expect("workflow");
		let outcome = workflow.run_batch().expect("settles");

		assert_eq!(outcome.query, "rust");
		assert!(outcome.results.is_empty());
		assert_eq!(outcome.error.as_deref(), Some(quarry::SEARCH_FAILED_MESSAGE));
	}
}
