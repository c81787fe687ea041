//! Shared wire types and transport for the `quarry` search client.
//!
//! The crate has no terminal concerns: it knows how to
//! encode a query, how to decode the endpoint's result list, and how to collapse
//! every failure into the single [`SearchError`] family the UI reports.

mod client;
mod error;
mod hit;
mod request;

pub use client::{DEFAULT_TIMEOUT, HttpSearchClient, SearchBackend, default_seed_endpoint};
pub use error::{SEARCH_FAILED_MESSAGE, SearchError};
pub use hit::{NO_DESCRIPTION, SearchHit, UNTITLED, decode_results};
pub use request::SearchRequest;

pub use reqwest::{StatusCode, Url};
