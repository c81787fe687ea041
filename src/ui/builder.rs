use std::sync::Arc;

use anyhow::{Result, anyhow};
use quarry_api::SearchBackend;

use super::outcome::SearchOutcome;
use super::state::SearchView;
use crate::tui::{Theme, theme};

/// Builder for the interactive search form.
///
/// Collects the presentation settings before the worker thread is spawned, so
/// callers can configure everything up front and then either [`run`] the
/// terminal UI or [`build`] a bare [`SearchView`] for headless use.
///
/// [`run`]: SearchUi::run
/// [`build`]: SearchUi::build
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	title: Option<String>,
	placeholder: Option<String>,
	initial_query: String,
	theme: Option<Theme>,
}

impl SearchUi {
	pub fn new(backend: impl SearchBackend) -> Self {
		Self::from_shared(Arc::new(backend))
	}

	pub fn from_shared(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			title: None,
			placeholder: None,
			initial_query: String::new(),
			theme: None,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a bundled theme by name or alias.
	pub fn with_theme_name(self, name: &str) -> Result<Self> {
		let theme = theme::by_name(name).ok_or_else(|| anyhow!("unknown theme `{name}`"))?;
		Ok(self.with_theme(theme))
	}

	pub fn build(self) -> SearchView<'static> {
		let mut view = SearchView::new(self.backend);
		if let Some(title) = self.title {
			view.set_title(title);
		}
		if let Some(placeholder) = self.placeholder {
			view.set_placeholder(placeholder);
		}
		if let Some(theme) = self.theme {
			view.set_theme(theme);
		}
		view.on_query_change(self.initial_query);
		view
	}

	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use quarry_api::{SearchError, SearchHit};

	use super::*;
	use crate::tui::theme::LIGHT;
	use crate::ui::RequestState;

	fn nothing(_: &str) -> Result<Vec<SearchHit>, SearchError> {
		Ok(Vec::new())
	}

	#[test]
	fn builder_applies_presentation_settings() {
		let view = SearchUi::new(nothing)
			.with_title("Docs")
			.with_placeholder("Type here")
			.with_initial_query("seed")
			.with_theme_name("light")
			.expect("known theme")
			.build();

		assert_eq!(view.title, "Docs");
		assert_eq!(view.placeholder, "Type here");
		assert_eq!(view.query(), "seed");
		assert_eq!(view.theme, LIGHT);
		assert_eq!(view.state(), &RequestState::Idle);
	}

	#[test]
	fn unknown_theme_is_rejected() {
		assert!(SearchUi::new(nothing).with_theme_name("neon").is_err());
	}
}
