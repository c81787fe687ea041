//! Configuration loading and resolution.
//!
//! `load` merges config files, `QUARRY__*` environment variables and CLI flags
//! into a [`ResolvedConfig`]; every value is validated before the application
//! sees it.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
