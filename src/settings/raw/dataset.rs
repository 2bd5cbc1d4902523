use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[dataset]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
	pub(super) path: Option<PathBuf>,
	pub(super) dedupe: Option<bool>,
}

impl DatasetSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
		if let Some(dedupe) = cli.dedupe {
			self.dedupe = Some(dedupe);
		}
	}
}
