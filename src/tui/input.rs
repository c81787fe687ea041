use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor backed by [`TextArea`].
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![single_line(initial.into())]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text, exactly as typed.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the whole text and park the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(single_line(text.into()));
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Newline-producing keys are swallowed so the query stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let inserts_newline = match key.code {
			KeyCode::Enter => true,
			KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
			_ => false,
		};
		if inserts_newline {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn set_block(&mut self, block: Block<'a>) {
		self.textarea.set_block(block);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn single_line(text: String) -> String {
	if text.contains(['\n', '\r']) {
		text.replace(['\n', '\r'], " ")
	} else {
		text
	}
}
