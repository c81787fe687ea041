use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::outcome::SearchOutcome;
use super::state::SearchView;

impl<'a> SearchView<'a> {
	/// Apply a key press. Returns the final outcome once the user leaves.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::Enter if self.is_submit_enabled() => {
				self.on_submit();
			}
			KeyCode::Enter => {}
			KeyCode::Up => self.select_previous(),
			KeyCode::Down => self.select_next(),
			_ => {
				self.input.input(key);
			}
		}
		None
	}
}
