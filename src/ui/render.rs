use quarry_api::SearchHit;
use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
};
use throbber_widgets_tui::Throbber;

use super::state::{RequestState, SearchView};
use crate::tui::Theme;

pub const SUBMIT_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";
pub(crate) const RESULTS_HEADING: &str = "Search Results";

const TITLE_HEIGHT: u16 = 2;
const FORM_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 18;
const ERROR_HEIGHT: u16 = 3;

/// What goes below the form. A pure function of the request state and the
/// current query text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'v> {
	Empty,
	Error(&'v str),
	Results(&'v [SearchHit]),
	NoResults(&'v str),
}

fn body_for<'v>(state: &'v RequestState, query: &'v str) -> Body<'v> {
	match state {
		RequestState::Error(message) => Body::Error(message),
		RequestState::Loading => Body::Empty,
		RequestState::Success(hits) if !hits.is_empty() => Body::Results(hits),
		_ if !query.is_empty() => Body::NoResults(query),
		_ => Body::Empty,
	}
}

impl<'a> SearchView<'a> {
	pub fn submit_label(&self) -> &'static str {
		if self.state.is_loading() {
			SEARCHING_LABEL
		} else {
			SUBMIT_LABEL
		}
	}

	pub fn body(&self) -> Body<'_> {
		body_for(&self.state, self.input.text())
	}

	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(TITLE_HEIGHT),
				Constraint::Length(FORM_HEIGHT),
				Constraint::Min(0),
			])
			.split(area);

		let title = Paragraph::new(self.title.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.title_style());
		frame.render_widget(title, layout[0]);
		self.render_form(frame, layout[1]);
		self.render_body(frame, layout[2]);
	}

	fn render_form(&self, frame: &mut Frame, area: Rect) {
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
			.split(area);

		self.input.render(frame, columns[0]);

		let enabled = self.is_submit_enabled();
		let style = self.theme.button_style(enabled);
		let mut label = Line::default();
		if !enabled {
			let spinner = Throbber::default().style(style).throbber_style(style);
			label.spans.push(spinner.to_symbol_span(&self.throbber_state));
		}
		label.spans.push(Span::styled(self.submit_label(), style));

		let button = Paragraph::new(label)
			.alignment(Alignment::Center)
			.style(style)
			.block(Block::bordered().border_style(style));
		frame.render_widget(button, columns[1]);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}

		match body_for(&self.state, self.input.text()) {
			Body::Empty => {}
			Body::Error(message) => {
				let style = self.theme.error_style();
				let rect = Rect {
					height: ERROR_HEIGHT.min(area.height),
					..area
				};
				let error = Paragraph::new(message)
					.style(style)
					.wrap(Wrap { trim: true })
					.block(Block::bordered().border_style(style));
				frame.render_widget(error, rect);
			}
			Body::Results(hits) => {
				render_results(frame, area, hits, &self.theme, &mut self.list_state);
			}
			Body::NoResults(query) => {
				let empty = Paragraph::new(format!("No results found for \"{query}\""))
					.alignment(Alignment::Center)
					.style(self.theme.empty_style());
				frame.render_widget(empty, area);
			}
		}
	}
}

fn render_results(
	frame: &mut Frame,
	area: Rect,
	hits: &[SearchHit],
	theme: &Theme,
	list_state: &mut ListState,
) {
	let sections = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(1), Constraint::Min(0)])
		.split(area);

	let heading = Paragraph::new(RESULTS_HEADING).style(theme.heading_style());
	frame.render_widget(heading, sections[0]);

	let items: Vec<ListItem> = hits
		.iter()
		.map(|hit| {
			ListItem::new(vec![
				Line::styled(hit.display_title(), theme.item_title_style()),
				Line::styled(hit.display_description(), theme.item_description_style()),
				Line::default(),
			])
		})
		.collect();

	let list = List::new(items).highlight_style(theme.row_highlight_style());
	frame.render_stateful_widget(list, sections[1], list_state);
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use quarry_api::{SEARCH_FAILED_MESSAGE, SearchBackend, SearchError};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;

	use super::*;

	fn idle_view() -> SearchView<'static> {
		let backend: Arc<dyn SearchBackend> =
			Arc::new(|_: &str| -> Result<Vec<SearchHit>, SearchError> { Ok(Vec::new()) });
		SearchView::new(backend)
	}

	fn render(view: &mut SearchView) -> String {
		let mut terminal = Terminal::new(TestBackend::new(64, 16)).expect("terminal");
		terminal.draw(|frame| view.draw(frame)).expect("draw");
		buffer_to_string(terminal.backend().buffer())
	}

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line);
		}
		lines.join("\n")
	}

	#[test]
	fn body_is_a_function_of_state_and_query() {
		let hits = vec![SearchHit::new("A", "B")];
		let success = RequestState::Success(hits.clone());
		let empty = RequestState::Success(Vec::new());
		let error = RequestState::Error("bad".into());

		assert_eq!(body_for(&RequestState::Idle, ""), Body::Empty);
		assert_eq!(body_for(&RequestState::Idle, "typed"), Body::NoResults("typed"));
		assert_eq!(body_for(&RequestState::Loading, "typed"), Body::Empty);
		assert_eq!(body_for(&success, "q"), Body::Results(&hits));
		assert_eq!(body_for(&empty, "q"), Body::NoResults("q"));
		assert_eq!(body_for(&empty, ""), Body::Empty);
		assert_eq!(body_for(&error, "q"), Body::Error("bad"));
	}

	#[test]
	fn idle_view_shows_title_form_and_placeholder() {
		let mut view = idle_view();
		let screen = render(&mut view);

		assert!(screen.contains("Search Application"));
		assert!(screen.contains("Enter your search query..."));
		assert!(screen.contains(SUBMIT_LABEL));
		assert!(!screen.contains("No results found"));
	}

	#[test]
	fn loading_view_disables_submit() {
		let mut view = idle_view();
		view.on_query_change("rust");
		view.state = RequestState::Loading;

		assert!(!view.is_submit_enabled());
		let screen = render(&mut view);
		assert!(screen.contains(SEARCHING_LABEL));
		assert!(!screen.contains("No results found"));
	}

	#[test]
	fn results_render_in_server_order_with_defaults() {
		let mut view = idle_view();
		view.on_query_change("rust");
		view.state = RequestState::Success(vec![SearchHit::new("A", "B"), SearchHit::default()]);

		let screen = render(&mut view);
		assert!(screen.contains(RESULTS_HEADING));
		assert!(screen.contains("Untitled"));
		assert!(screen.contains("No description available"));
		let lines: Vec<&str> = screen.lines().collect();
		let first = lines.iter().position(|line| line.trim() == "A").expect("first title");
		let second = lines
			.iter()
			.position(|line| line.trim() == "Untitled")
			.expect("second title");
		assert!(first < second);
		assert_eq!(lines[first + 1].trim(), "B");
	}

	#[test]
	fn error_suppresses_results() {
		let mut view = idle_view();
		view.on_query_change("rust");
		view.state = RequestState::Error(SEARCH_FAILED_MESSAGE.into());

		let screen = render(&mut view);
		assert!(screen.contains(SEARCH_FAILED_MESSAGE));
		assert!(!screen.contains(RESULTS_HEADING));
		assert!(!screen.contains("No results found"));
	}

	#[test]
	fn empty_success_quotes_the_query() {
		let mut view = idle_view();
		view.on_query_change("zebra stripes");
		view.state = RequestState::Success(Vec::new());

		let screen = render(&mut view);
		assert!(screen.contains("No results found for \"zebra stripes\""));
	}
}
