use serde::Serialize;

/// JSON body posted to the search endpoint.
///
/// The query is sent exactly as typed; trimming is only used by callers to
/// decide whether a submission happens at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchRequest<'q> {
	pub query: &'q str,
}

impl<'q> SearchRequest<'q> {
	pub fn new(query: &'q str) -> Self {
		Self { query }
	}
}
