//! File logging for the terminal UI.
//!
//! The widget owns the terminal while it runs, so log records go to
//! `lookahead.log` in the data directory instead of stderr. The filter is read
//! from `LOOKAHEAD_LOG` and falls back to the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "LOOKAHEAD_LOG";
/// File name of the log inside the log directory.
pub const LOG_FILE: &str = "lookahead.log";
/// Level used when neither the environment nor the config names one.
pub const DEFAULT_LEVEL: &str = "info";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Install the global subscriber writing to `dir/lookahead.log`.
///
/// Only the first call installs anything; later calls return the path chosen
/// by the first one.
pub fn initialize(dir: &Path, level: &str) -> Result<PathBuf> {
	if let Some(path) = LOG_PATH.get() {
		return Ok(path.clone());
	}

	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(level))
		.with_context(|| format!("invalid log level '{level}'"))?;

	let layer = tracing_subscriber::fmt::layer()
		.with_ansi(false)
		.with_target(true)
		.with_writer(Mutex::new(file));

	// Another subscriber may already be installed by an embedding program.
	if tracing_subscriber::registry()
		.with(filter)
		.with(layer)
		.try_init()
		.is_err()
	{
		tracing::debug!("global subscriber already set; keeping it");
	}

	Ok(LOG_PATH.get_or_init(|| path).clone())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeated_initialization_keeps_the_first_path() {
		let first = tempfile::tempdir().expect("tempdir");
		let second = tempfile::tempdir().expect("tempdir");

		let path = initialize(first.path(), "debug").expect("initialize logging");
		assert_eq!(path, first.path().join(LOG_FILE));
		assert!(path.exists());

		let again = initialize(second.path(), "info").expect("initialize again");
		assert_eq!(again, path);
		assert!(!second.path().join(LOG_FILE).exists());
	}
}
