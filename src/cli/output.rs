use anyhow::Result;
use quarry::SearchOutcome;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if let Some(error) = &outcome.error {
		return format!("{error}\n");
	}

	if outcome.results.is_empty() {
		if outcome.query.is_empty() {
			return String::new();
		}
		return format!("No results found for \"{}\"\n", outcome.query);
	}

	let mut text = String::new();
	for hit in &outcome.results {
		text.push_str(hit.display_title());
		text.push('\n');
		text.push_str("    ");
		text.push_str(hit.display_description());
		text.push('\n');
	}
	text
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use quarry::SearchHit;
	use serde_json::Value;

	use super::*;

	fn outcome(results: Vec<SearchHit>) -> SearchOutcome {
		SearchOutcome {
			query: "mongo".into(),
			results,
			error: None,
		}
	}

	#[test]
	fn plain_format_lists_titles_and_descriptions() {
		let text = format_outcome_plain(&outcome(vec![
			SearchHit::new("MongoDB Tutorial", "Learn how to use MongoDB with Python"),
			SearchHit::default(),
		]));
		assert_eq!(
			text,
			"MongoDB Tutorial\n    Learn how to use MongoDB with Python\nUntitled\n    No description available\n"
		);
	}

	#[test]
	fn plain_format_reports_empty_and_failed_searches() {
		assert_eq!(
			format_outcome_plain(&outcome(Vec::new())),
			"No results found for \"mongo\"\n"
		);

		let failed = SearchOutcome {
			error: Some("Failed to fetch search results. Please try again.".into()),
			..outcome(Vec::new())
		};
		assert_eq!(
			format_outcome_plain(&failed),
			"Failed to fetch search results. Please try again.\n"
		);
	}

	#[test]
	fn json_format_includes_query_and_results() {
		let json = format_outcome_json(&outcome(vec![SearchHit::new("A", "B")])).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "mongo");
		assert_eq!(value["results"][0]["title"], "A");
		assert_eq!(value["results"][0]["description"], "B");
		assert!(value.get("error").is_none());
	}
}
