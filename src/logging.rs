//! `tracing` subscriber setup.
//!
//! The interactive UI owns the terminal, so it logs to a file in the cache
//! directory. Batch and seed runs log to stderr. The filter is read from
//! `QUARRY_LOG` using the usual `EnvFilter` directive syntax.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "QUARRY_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";
const LOG_FILE_NAME: &str = "quarry.log";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Install the global subscriber. Later calls are no-ops.
pub fn initialize(target: LogTarget) -> Result<()> {
	if INITIALIZED.swap(true, Ordering::SeqCst) {
		return Ok(());
	}

	let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
	let installed = match target {
		LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
		LogTarget::File(path) => {
			let file = open_log_file(&path)?;
			builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init()
		}
	};

	installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// Default location of the interactive log file.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use std::env;

	use super::*;
	use tempfile::tempdir;

	#[test]
	fn log_file_parent_directories_are_created() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested/logs/quarry.log");

		open_log_file(&path).expect("opens");

		assert!(path.exists());
	}

	#[test]
	fn default_log_file_lives_in_the_cache_dir() {
		let dir = tempdir().unwrap();
		let previous = env::var_os("QUARRY_CACHE_DIR");
		// SAFETY: Pointing the cache override at a temporary directory for this test.
		unsafe {
			env::set_var("QUARRY_CACHE_DIR", dir.path().as_os_str());
		}

		let path = default_log_file();

		if let Some(value) = previous {
			// SAFETY: Restoring the override captured at the start of the test.
			unsafe {
				env::set_var("QUARRY_CACHE_DIR", value);
			}
		} else {
			unsafe {
				env::remove_var("QUARRY_CACHE_DIR");
			}
		}

		assert_eq!(path.expect("log path"), dir.path().join(LOG_FILE_NAME));
	}
}
