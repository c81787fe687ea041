use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::SearchError;
use crate::hit::{SearchHit, decode_results};
use crate::request::SearchRequest;

/// Upper bound for a single request when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const SEED_PATH: &str = "add_sample_data";

/// Anything able to answer a query with an ordered list of hits.
///
/// Implementations are called from a background worker thread and may block.
pub trait SearchBackend: Send + Sync + 'static {
	fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

impl<F> SearchBackend for F
where
	F: Fn(&str) -> Result<Vec<SearchHit>, SearchError> + Send + Sync + 'static,
{
	fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
		self(query)
	}
}

/// Resolve the sample-data route that sits next to the search route.
///
/// `http://host:5000/search` becomes `http://host:5000/add_sample_data`.
pub fn default_seed_endpoint(endpoint: &Url) -> Option<Url> {
	endpoint.join(SEED_PATH).ok()
}

/// Blocking JSON client for the remote search endpoint.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	http: Client,
	endpoint: Url,
	seed_endpoint: Url,
}

impl HttpSearchClient {
	pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SearchError> {
		let http = Client::builder().timeout(timeout).build()?;
		Ok(Self::with_http(http, endpoint))
	}

	fn with_http(http: Client, endpoint: Url) -> Self {
		let seed_endpoint = default_seed_endpoint(&endpoint).unwrap_or_else(|| endpoint.clone());
		Self {
			http,
			endpoint,
			seed_endpoint,
		}
	}

	#[must_use]
	pub fn with_seed_endpoint(mut self, seed_endpoint: Url) -> Self {
		self.seed_endpoint = seed_endpoint;
		self
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	pub fn seed_endpoint(&self) -> &Url {
		&self.seed_endpoint
	}

	/// Ask the backend to insert its demo documents. Returns the server's message.
	pub fn seed_sample_data(&self) -> Result<String, SearchError> {
		tracing::info!(endpoint = %self.seed_endpoint, "requesting sample data");
		let response = self
			.http
			.post(self.seed_endpoint.clone())
			.json(&serde_json::Map::new())
			.send()?;
		let status = response.status();
		let body = response.bytes()?;
		if !status.is_success() {
			return Err(SearchError::Status {
				status,
				detail: error_detail(&body),
			});
		}

		let payload: Value = serde_json::from_slice(&body)?;
		let message = payload
			.get("message")
			.and_then(Value::as_str)
			.unwrap_or("sample data added");
		Ok(message.to_owned())
	}
}

impl SearchBackend for HttpSearchClient {
	fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
		tracing::debug!(endpoint = %self.endpoint, query, "posting search request");
		let response = self
			.http
			.post(self.endpoint.clone())
			.json(&SearchRequest::new(query))
			.send()?;

		let status = response.status();
		if !status.is_success() {
			let detail = response.bytes().ok().and_then(|body| error_detail(&body));
			return Err(SearchError::Status { status, detail });
		}

		let body = response.bytes()?;
		let hits = decode_results(&body)?;
		tracing::debug!(count = hits.len(), "search response decoded");
		Ok(hits)
	}
}

/// Pull a human readable reason out of an error body, if the server sent one.
fn error_detail(body: &[u8]) -> Option<String> {
	let payload: Value = serde_json::from_slice(body).ok()?;
	["error", "message"]
		.iter()
		.find_map(|key| payload.get(*key).and_then(Value::as_str))
		.map(str::to_owned)
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::{TcpListener, TcpStream};
	use std::thread::{self, JoinHandle};

	use reqwest::StatusCode;

	use super::*;

	/// Accept one connection, capture the raw request and reply with `status`/`body`.
	fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().expect("accept");
			let request = read_request(&mut stream);
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).expect("write");
			request
		});
		let url = Url::parse(&format!("http://{addr}/search")).expect("url");
		(url, handle)
	}

	fn read_request(stream: &mut TcpStream) -> String {
		let mut buf = Vec::new();
		let mut chunk = [0u8; 1024];
		let mut expected = None;
		loop {
			if let Some(total) = expected
				&& buf.len() >= total
			{
				break;
			}
			let read = stream.read(&mut chunk).expect("read");
			if read == 0 {
				break;
			}
			buf.extend_from_slice(&chunk[..read]);
			if expected.is_none()
				&& let Some(end) = buf.windows(4).position(|window| window == b"\r\n\r\n")
			{
				let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
				let length = head
					.lines()
					.find_map(|line| line.strip_prefix("content-length:"))
					.and_then(|value| value.trim().parse::<usize>().ok())
					.unwrap_or(0);
				expected = Some(end + 4 + length);
			}
		}
		String::from_utf8_lossy(&buf).into_owned()
	}

	fn client_for(url: Url) -> HttpSearchClient {
		let http = Client::builder()
			.timeout(Duration::from_secs(5))
			.no_proxy()
			.build()
			.expect("client");
		HttpSearchClient::with_http(http, url)
	}

	#[test]
	fn posts_raw_query_as_json() {
		let (url, server) = serve_once(
			"200 OK",
			r#"{"results":[{"title":"A","description":"B"}]}"#,
		);
		let hits = client_for(url).search(" rust ").expect("search succeeds");
		let request = server.join().expect("server thread");

		assert_eq!(hits, vec![SearchHit::new("A", "B")]);
		assert!(request.starts_with("POST /search HTTP/1.1"));
		assert!(
			request
				.to_ascii_lowercase()
				.contains("content-type: application/json")
		);
		assert!(request.ends_with(r#"{"query":" rust "}"#));
	}

	#[test]
	fn non_success_status_is_reported_with_detail() {
		let (url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
		let err = client_for(url).search("rust").unwrap_err();
		server.join().expect("server thread");

		match err {
			SearchError::Status { status, detail } => {
				assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
				assert_eq!(detail.as_deref(), Some("boom"));
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn malformed_success_body_is_a_decode_error() {
		let (url, server) = serve_once("200 OK", "not json");
		let err = client_for(url).search("rust").unwrap_err();
		server.join().expect("server thread");
		assert!(matches!(err, SearchError::Decode(_)));
	}

	#[test]
	fn missing_results_field_yields_empty_list() {
		let (url, server) = serve_once("200 OK", r#"{"message":"nothing"}"#);
		let hits = client_for(url).search("rust").expect("search succeeds");
		server.join().expect("server thread");
		assert!(hits.is_empty());
	}

	#[test]
	fn refused_connection_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		drop(listener);

		let url = Url::parse(&format!("http://{addr}/search")).unwrap();
		let err = client_for(url).search("rust").unwrap_err();
		assert!(matches!(err, SearchError::Transport(_)));
	}

	#[test]
	fn seed_endpoint_sits_next_to_search_route() {
		let url = Url::parse("http://localhost:5000/search").unwrap();
		let seed = default_seed_endpoint(&url).unwrap();
		assert_eq!(seed.as_str(), "http://localhost:5000/add_sample_data");

		let nested = Url::parse("https://example.com/api/v1/search").unwrap();
		assert_eq!(
			default_seed_endpoint(&nested).unwrap().as_str(),
			"https://example.com/api/v1/add_sample_data"
		);
	}

	#[test]
	fn seeding_returns_server_message() {
		let (url, server) = serve_once("200 OK", r#"{"message":"Added 5 sample documents"}"#);
		let client = client_for(url);
		let message = client.seed_sample_data().expect("seed succeeds");
		let request = server.join().expect("server thread");

		assert_eq!(message, "Added 5 sample documents");
		assert!(request.starts_with("POST /add_sample_data HTTP/1.1"));
	}

	#[test]
	fn seeding_failure_reports_server_error() {
		let (url, server) = serve_once("500 Internal Server Error", r#"{"error":"mongo down"}"#);
		let err = client_for(url).seed_sample_data().unwrap_err();
		server.join().expect("server thread");

		match err {
			SearchError::Status { status, detail } => {
				assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
				assert_eq!(detail.as_deref(), Some("mongo down"));
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn seeding_with_malformed_body_is_a_decode_error() {
		let (url, server) = serve_once("200 OK", "sample data added");
		let err = client_for(url).seed_sample_data().unwrap_err();
		server.join().expect("server thread");
		assert!(matches!(err, SearchError::Decode(_)));
	}

	#[test]
	fn closures_act_as_backends() {
		let backend = |query: &str| -> Result<Vec<SearchHit>, SearchError> {
			Ok(vec![SearchHit::new(query, "echo")])
		};
		let hits = SearchBackend::search(&backend, "ping").unwrap();
		assert_eq!(hits[0].display_title(), "ping");
	}
}
