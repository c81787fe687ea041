use std::sync::Arc;

use quarry_api::{SearchBackend, SearchHit};
use ratatui::widgets::{Block, ListState};
use throbber_widgets_tui::ThrobberState;

use super::outcome::SearchOutcome;
use super::worker;
use crate::tui::{SearchInput, Theme};

mod search_runtime;

use search_runtime::SearchRuntime;

pub const DEFAULT_TITLE: &str = "Search Application";
pub const DEFAULT_PLACEHOLDER: &str = "Enter your search query...";

/// Lifecycle of the most recent submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
	#[default]
	Idle,
	Loading,
	Success(Vec<SearchHit>),
	Error(String),
}

impl RequestState {
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	/// Hits of a successful search, empty in every other state.
	pub fn results(&self) -> &[SearchHit] {
		match self {
			Self::Success(hits) => hits.as_slice(),
			_ => &[],
		}
	}

	pub fn error(&self) -> Option<&str> {
		match self {
			Self::Error(message) => Some(message.as_str()),
			_ => None,
		}
	}
}

impl<'a> Drop for SearchView<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// The search form: query text, request state and presentation settings.
pub struct SearchView<'a> {
	pub(crate) input: SearchInput<'a>,
	pub(crate) state: RequestState,
	pub(crate) title: String,
	pub(crate) placeholder: String,
	pub(crate) theme: Theme,
	pub(crate) list_state: ListState,
	pub(crate) throbber_state: ThrobberState,
	pub(super) search: SearchRuntime,
}

impl<'a> SearchView<'a> {
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let (search_tx, search_rx, latest_query_id) = worker::spawn(backend);
		let mut view = Self {
			input: SearchInput::new(String::new()),
			state: RequestState::Idle,
			title: DEFAULT_TITLE.to_owned(),
			placeholder: DEFAULT_PLACEHOLDER.to_owned(),
			theme: Theme::default(),
			list_state: ListState::default(),
			throbber_state: ThrobberState::default(),
			search: SearchRuntime::new(search_tx, search_rx, latest_query_id),
		};
		view.style_input();
		view
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
		self.style_input();
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.style_input();
	}

	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn state(&self) -> &RequestState {
		&self.state
	}

	/// Replace the query text. No validation happens here.
	pub fn on_query_change(&mut self, text: impl Into<String>) {
		self.input.set_text(text);
	}

	/// Submit the current query.
	///
	/// Whitespace-only queries are ignored and leave the state untouched.
	/// Otherwise the view enters [`RequestState::Loading`] immediately and the
	/// untrimmed query is handed to the worker. Returns whether a request was
	/// issued.
	pub fn on_submit(&mut self) -> bool {
		let query = self.query();
		if query.trim().is_empty() {
			return false;
		}

		let query = query.to_owned();
		let id = self.search.issue_search(query);
		tracing::debug!(id, query = self.query(), "search submitted");
		self.state = RequestState::Loading;
		self.list_state.select(None);
		true
	}

	pub fn is_submit_enabled(&self) -> bool {
		!self.state.is_loading()
	}

	pub fn outcome(&self) -> SearchOutcome {
		SearchOutcome {
			query: self.query().to_owned(),
			results: self.state.results().to_vec(),
			error: self.state.error().map(str::to_owned),
		}
	}

	pub(crate) fn select_previous(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn select_next(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.state.results().len()
		{
			self.list_state.select(Some(selected + 1));
		}
	}

	fn style_input(&mut self) {
		let prompt = self.theme.prompt_style();
		self.input.set_style(prompt);
		self.input
			.set_placeholder(self.placeholder.clone(), self.theme.placeholder_style());
		self.input.set_block(Block::bordered().border_style(prompt));
	}
}
