use quarry_api::SearchHit;
use serde::Serialize;

/// What the view was showing when it closed, or when a batch search settled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOutcome {
	pub query: String,
	pub results: Vec<SearchHit>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}
