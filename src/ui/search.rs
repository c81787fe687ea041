use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use quarry_api::SEARCH_FAILED_MESSAGE;

use super::state::{RequestState, SearchView};
use super::worker::SearchResult;

impl<'a> SearchView<'a> {
	/// Drain any results waiting on the worker channel.
	pub fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					self.handle_worker_loss();
					break;
				}
			}
		}
	}

	/// Block until the outstanding submission resolves or `timeout` elapses.
	///
	/// Returns `true` once nothing is in flight.
	pub fn settle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.search.is_in_flight() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			match self.search.recv_timeout(remaining) {
				Ok(result) => self.handle_search_result(result),
				Err(RecvTimeoutError::Timeout) => return false,
				Err(RecvTimeoutError::Disconnected) => {
					self.handle_worker_loss();
					return true;
				}
			}
		}
		true
	}

	/// Apply a result only if it answers the newest submission.
	fn handle_search_result(&mut self, result: SearchResult) {
		if !self.search.matches_latest(result.id) {
			tracing::debug!(id = result.id, "dropping stale search result");
			return;
		}

		self.search.record_completion();
		self.state = match result.outcome {
			Ok(hits) => {
				tracing::info!(id = result.id, count = hits.len(), "search completed");
				self.list_state
					.select(if hits.is_empty() { None } else { Some(0) });
				RequestState::Success(hits)
			}
			Err(err) => {
				tracing::warn!(id = result.id, error = %err, "search failed");
				self.list_state.select(None);
				RequestState::Error(err.user_message().to_owned())
			}
		};
	}

	fn handle_worker_loss(&mut self) {
		if self.search.is_in_flight() {
			tracing::error!("search worker disconnected with a request in flight");
			self.search.record_completion();
			self.state = RequestState::Error(SEARCH_FAILED_MESSAGE.to_owned());
		}
	}
}
