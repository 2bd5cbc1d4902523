use std::path::PathBuf;

use classhash::UiLabels;
use classhash::logging::LogConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub dataset_path: PathBuf,
	pub dedupe: bool,
	pub theme: Option<String>,
	/// Overrides the stored search value when set.
	pub initial_query: Option<String>,
	/// Overrides the stored display-hex flag when set.
	pub display_hex: Option<bool>,
	pub table_title: Option<String>,
	pub headers: Option<Vec<String>>,
	/// `None` keeps preferences in memory only.
	pub preferences_path: Option<PathBuf>,
	pub log: LogConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Labels for the UI with configured overrides applied.
	pub fn labels(&self) -> UiLabels {
		let mut labels = UiLabels::default();
		if let Some(title) = &self.table_title {
			labels = labels.with_table_title(title.clone());
		}
		if let Some([class_ref, stride]) = self.headers.as_deref() {
			labels = labels.with_headers(class_ref.clone(), stride.clone());
		}
		labels
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample_config(dataset_path: PathBuf) -> ResolvedConfig {
	ResolvedConfig {
		dataset_path,
		dedupe: false,
		theme: None,
		initial_query: None,
		display_hex: None,
		table_title: None,
		headers: None,
		preferences_path: None,
		log: LogConfig {
			level: "info".into(),
			file: PathBuf::from("classhash.log"),
		},
	}
}
