//! Resolve configuration, cache, and data directories for `classhash`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "classhash";
const APPLICATION: &str = "classhash";

const CONFIG_DIR_ENV: &str = "CLASSHASH_CONFIG_DIR";
const DATA_DIR_ENV: &str = "CLASSHASH_DATA_DIR";
const CACHE_DIR_ENV: &str = "CLASSHASH_CACHE_DIR";

/// File name of the dataset looked up in the data directory by default.
pub const DATASET_FILE_NAME: &str = "data.json";
/// File name of the persisted preferences inside the data directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
/// File name of the log written inside the cache directory.
pub const LOG_FILE_NAME: &str = "classhash.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for classhash"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores the dataset and preferences.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Return the cache directory used for the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Default location of the dataset artifact.
pub fn default_dataset_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(DATASET_FILE_NAME))
}

/// Default location of the preferences file.
pub fn default_preferences_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(PREFERENCES_FILE_NAME))
}

/// Default location of the log file.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(get_cache_dir()?.join(LOG_FILE_NAME))
}
