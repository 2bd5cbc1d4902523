use classhash::logging::validate_level;
use classhash::ui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if !config.dataset_path.is_file() {
		return Err(ConfigError::invalid(
			"dataset.path",
			config.dataset_path.display().to_string(),
			sources.source_for_dataset_path(),
			"dataset file does not exist",
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		));
	}

	if let Err(reason) = validate_level(&config.log.level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log.level.clone(),
			sources.source_for_log_level(),
			reason,
		));
	}

	if let Some(headers) = &config.headers
		&& headers.len() != 2
	{
		return Err(ConfigError::invalid(
			"ui.headers",
			headers.join(","),
			sources.source_for_headers(),
			"expected exactly two column headers",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use tempfile::NamedTempFile;

	use super::super::{SettingSource, sample_config};
	use super::*;

	#[test]
	fn accepts_existing_dataset_and_defaults() {
		let file = NamedTempFile::new().expect("temp file");
		let config = sample_config(file.path().to_path_buf());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn rejects_missing_dataset() {
		let config = sample_config(PathBuf::from("/definitely/not/here.json"));
		let sources = ConfigSources {
			dataset_path: Some(SettingSource::CliFlag("--data")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "dataset.path");
		let message = err.to_string();
		assert!(message.contains("/definitely/not/here.json"));
		assert!(message.contains("CLI flag `--data`"));
	}

	#[test]
	fn rejects_unknown_theme() {
		let file = NamedTempFile::new().expect("temp file");
		let mut config = sample_config(file.path().to_path_buf());
		config.theme = Some("neon".into());
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("CLASSHASH__UI__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("value: neon"));
		assert!(message.contains("environment variable"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn rejects_bad_log_level() {
		let file = NamedTempFile::new().expect("temp file");
		let mut config = sample_config(file.path().to_path_buf());
		config.log.level = "classhash=loud".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert_eq!(err.origin, SettingSource::Default);
	}

	#[test]
	fn rejects_wrong_header_count() {
		let file = NamedTempFile::new().expect("temp file");
		let mut config = sample_config(file.path().to_path_buf());
		config.headers = Some(vec!["Only".into()]);

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.headers");
		assert!(err.to_string().contains("configuration key `ui.headers`"));
	}
}
