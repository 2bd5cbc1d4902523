//! Structured logging setup.
//!
//! The terminal belongs to the UI while it runs, so events are written to a
//! log file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CLASSHASH_LOG";
/// Level used when neither the environment nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	pub level: String,
	pub file: PathBuf,
}

/// Install the global subscriber writing to `config.file`.
///
/// A filter from [`LOG_ENV`] takes precedence over `config.level`. Calling
/// this more than once keeps the first subscriber.
pub fn initialize(config: &LogConfig) -> Result<()> {
	let file = open_log_file(&config.file)?;
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(&config.level))
		.with_context(|| format!("invalid log level '{}'", config.level))?;

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.is_ok();

	if installed {
		tracing::info!(path = %config.file.display(), "logging initialized");
	}
	Ok(())
}

/// Check that `level` is a usable filter directive.
pub fn validate_level(level: &str) -> Result<(), String> {
	EnvFilter::try_new(level)
		.map(|_| ())
		.map_err(|err| err.to_string())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(dir) = path.parent()
		&& !dir.as_os_str().is_empty()
	{
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory: {}", dir.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file: {}", path.display()))
}
