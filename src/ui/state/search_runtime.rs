use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::super::worker::{SearchCommand, SearchResult};

/// View-side bookkeeping for the background worker: issues ids, remembers
/// which one is authoritative and whether it has been answered.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchResult>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Queue `query` under a fresh id, superseding any earlier submission.
	pub(crate) fn issue_search(&mut self, query: String) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.in_flight = true;
		self.latest_query_id.store(id, AtomicOrdering::Release);
		if self.tx.send(SearchCommand::Query { id, query }).is_err() {
			tracing::error!(id, "search worker is gone; request dropped");
		}
		id
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn recv_timeout(&mut self, timeout: Duration) -> Result<SearchResult, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}
