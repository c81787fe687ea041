use serde::Serialize;
use serde_json::{Map, Value};

/// Display text for a hit whose title is missing or empty.
pub const UNTITLED: &str = "Untitled";
/// Display text for a hit whose description is missing or empty.
pub const NO_DESCRIPTION: &str = "No description available";

/// A single entry of the endpoint's `results` array.
///
/// Only `title` and `description` carry meaning for the client. Every other
/// field the server attaches (document ids, scores) is kept in `extra` so it
/// survives into JSON output untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchHit {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl SearchHit {
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			description: Some(description.into()),
			extra: Map::new(),
		}
	}

	/// Title to show, falling back to [`UNTITLED`].
	#[must_use]
	pub fn display_title(&self) -> &str {
		non_empty(self.title.as_deref()).unwrap_or(UNTITLED)
	}

	/// Description to show, falling back to [`NO_DESCRIPTION`].
	#[must_use]
	pub fn display_description(&self) -> &str {
		non_empty(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
	}

	fn from_value(value: Value) -> Self {
		let Value::Object(mut fields) = value else {
			return Self::default();
		};
		let title = take_string(&mut fields, "title");
		let description = take_string(&mut fields, "description");
		Self {
			title,
			description,
			extra: fields,
		}
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|text| !text.is_empty())
}

/// Remove `key` when it holds a string. Non-string values stay in `fields`.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
	match fields.remove(key)? {
		Value::String(text) => Some(text),
		Value::Null => None,
		other => {
			fields.insert(key.to_owned(), other);
			None
		}
	}
}

/// Decode a successful response body into its ordered hit list.
///
/// A body that is valid JSON but lacks an array-valued `results` field yields
/// an empty list. Invalid JSON is an error.
pub fn decode_results(body: &[u8]) -> Result<Vec<SearchHit>, serde_json::Error> {
	let payload: Value = serde_json::from_slice(body)?;
	let hits = match payload {
		Value::Object(mut fields) => match fields.remove("results") {
			Some(Value::Array(items)) => items.into_iter().map(SearchHit::from_value).collect(),
			_ => Vec::new(),
		},
		_ => Vec::new(),
	};
	Ok(hits)
}
