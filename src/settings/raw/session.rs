use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[preferences]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PreferencesSection {
	pub(super) path: Option<PathBuf>,
	pub(super) persist: Option<bool>,
}

impl PreferencesSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.preferences.clone() {
			self.path = Some(path);
		}
		if cli.ephemeral {
			self.persist = Some(false);
		}
	}
}

/// `[logging]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}
}
