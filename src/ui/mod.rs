//! Interactive search form.
//!
//! [`SearchView`] owns the query and the request lifecycle. Submissions run on
//! a background worker ([`worker`]) and come back tagged with the id they were
//! issued under, so only the newest submission can ever update the view. The
//! remaining submodules hold key handling, rendering and the terminal loop.

mod actions;
mod builder;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
mod worker;

pub use builder::SearchUi;
pub use outcome::SearchOutcome;
pub use render::{Body, SEARCHING_LABEL, SUBMIT_LABEL};
pub use runtime::run;
pub use state::{DEFAULT_PLACEHOLDER, DEFAULT_TITLE, RequestState, SearchView};
