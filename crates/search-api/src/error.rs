use reqwest::StatusCode;
use thiserror::Error;

/// The only failure text ever shown to the user.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch search results. Please try again.";

/// Everything that can go wrong while talking to the endpoint.
///
/// The variants exist for diagnostics only. Callers presenting the failure use
/// [`SearchError::user_message`], which is identical for all of them.
#[derive(Debug, Error)]
pub enum SearchError {
	#[error("endpoint responded with status {status}{}", detail_suffix(.detail))]
	Status {
		status: StatusCode,
		detail: Option<String>,
	},
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("response could not be decoded: {0}")]
	Decode(#[from] serde_json::Error),
}

impl SearchError {
	#[must_use]
	pub fn user_message(&self) -> &'static str {
		SEARCH_FAILED_MESSAGE
	}
}

fn detail_suffix(detail: &Option<String>) -> String {
	match detail {
		Some(detail) => format!(": {detail}"),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_variant_shares_the_user_message() {
		let status = SearchError::Status {
			status: StatusCode::BAD_REQUEST,
			detail: Some("Query is empty".into()),
		};
		let decode = SearchError::from(serde_json::from_str::<u8>("x").unwrap_err());
		assert_eq!(status.user_message(), SEARCH_FAILED_MESSAGE);
		assert_eq!(decode.user_message(), SEARCH_FAILED_MESSAGE);
	}

	#[test]
	fn status_display_includes_server_detail() {
		let err = SearchError::Status {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			detail: Some("db down".into()),
		};
		let message = err.to_string();
		assert!(message.contains("500"));
		assert!(message.ends_with(": db down"));

		let bare = SearchError::Status {
			status: StatusCode::NOT_FOUND,
			detail: None,
		};
		assert!(!bare.to_string().contains(':'));
	}
}
