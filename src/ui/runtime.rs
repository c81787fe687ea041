use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use quarry_api::SearchBackend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::outcome::SearchOutcome;
use super::state::SearchView;

/// Construct a [`SearchView`] for `backend` and run it to completion.
pub fn run(backend: Arc<dyn SearchBackend>) -> Result<SearchOutcome> {
	let mut view = SearchView::new(backend);
	view.run()
}

/// Hand the terminal back with `restore` when the first clear fails.
fn clear_or_restore(cleared: io::Result<()>, restore: impl FnOnce()) -> Result<()> {
	if let Err(err) = cleared {
		restore();
		return Err(err.into());
	}
	Ok(())
}

impl<'a> SearchView<'a> {
	/// Pump the terminal event loop until the user leaves.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		clear_or_restore(terminal.clear(), ratatui::restore)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.pump_search_results();
			if self.state.is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)
				{
					maybe_outcome = Some(outcome);
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[test]
	fn failed_clear_restores_the_terminal() {
		let restored = Cell::new(false);
		let cleared = Err(io::Error::other("clear failed"));

		let err = clear_or_restore(cleared, || restored.set(true)).unwrap_err();

		assert!(restored.get());
		assert!(err.to_string().contains("clear failed"));
	}

	#[test]
	fn successful_clear_keeps_the_terminal() {
		let restored = Cell::new(false);
		clear_or_restore(Ok(()), || restored.set(true)).expect("cleared");
		assert!(!restored.get());
	}
}
