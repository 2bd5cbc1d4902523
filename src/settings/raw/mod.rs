use std::env;

use anyhow::{Error, Result};
use classhash::app_dirs;
use classhash::logging::{DEFAULT_LEVEL, LogConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod dataset;
mod session;
mod ui;

use dataset::DatasetSection;
use session::{LoggingSection, PreferencesSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	dataset: DatasetSection,
	ui: UiSection,
	preferences: PreferencesSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.dataset.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.preferences.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			dataset_path: detect_source(
				cli.data.is_some(),
				self.dataset.path.is_some(),
				"CLASSHASH__DATASET__PATH",
				"--data",
				"dataset.path",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CLASSHASH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"CLASSHASH__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
			headers: detect_source(
				false,
				self.ui.headers.is_some(),
				"CLASSHASH__UI__HEADERS",
				"",
				"ui.headers",
			),
		};

		let dataset_path = match self.dataset.path {
			Some(path) => path,
			None => app_dirs::default_dataset_path()?,
		};
		let preferences_path = if self.preferences.persist.unwrap_or(true) {
			Some(match self.preferences.path {
				Some(path) => path,
				None => app_dirs::default_preferences_path()?,
			})
		} else {
			None
		};
		let log = LogConfig {
			level: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			file: match self.logging.file {
				Some(path) => path,
				None => app_dirs::default_log_path()?,
			},
		};

		let ui = self.ui.finalize();
		let config = ResolvedConfig {
			dataset_path,
			dedupe: self.dataset.dedupe.unwrap_or(false),
			theme: ui.theme,
			initial_query: ui.initial_query,
			display_hex: ui.display_hex,
			table_title: ui.table_title,
			headers: ui.headers,
			preferences_path,
			log,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
