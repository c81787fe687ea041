//! Core crate exports for building and running the `quarry` search form.
//!
//! The root module re-exports the UI entry points together with the HTTP
//! client types from `quarry-api`, so embedders can wire a backend into the
//! form without digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod tui;
pub mod ui;

pub use ui::{
	Body, DEFAULT_PLACEHOLDER, DEFAULT_TITLE, RequestState, SearchOutcome, SearchUi, SearchView,
	run,
};

pub use quarry_api::{
	DEFAULT_TIMEOUT, HttpSearchClient, SEARCH_FAILED_MESSAGE, SearchBackend, SearchError,
	SearchHit, Url, default_seed_endpoint,
};
