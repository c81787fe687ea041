use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use quarry_api::{SearchBackend, SearchError, SearchHit};

/// Messages accepted by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	Query { id: u64, query: String },
	Shutdown,
}

/// Outcome of one submission, tagged with the id it was issued under.
#[derive(Debug)]
pub(crate) struct SearchResult {
	pub id: u64,
	pub outcome: Result<Vec<SearchHit>, SearchError>,
}

/// Launch the worker thread and return its channels plus the shared id of the
/// newest submission.
pub(crate) fn spawn(
	backend: Arc<dyn SearchBackend>,
) -> (Sender<SearchCommand>, Receiver<SearchResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(backend.as_ref(), command_rx, result_tx, &thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	backend: &dyn SearchBackend,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(backend, &result_tx, latest_query_id, command) {
			break;
		}
	}
	tracing::debug!("search worker stopped");
}

fn handle_command(
	backend: &dyn SearchBackend,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			// A newer submission arrived while this one sat in the queue.
			if latest_query_id.load(Ordering::Acquire) != id {
				tracing::debug!(id, "skipping superseded search");
				return true;
			}
			let outcome = backend.search(&query);
			result_tx.send(SearchResult { id, outcome }).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}
