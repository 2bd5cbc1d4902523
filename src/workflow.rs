use anyhow::{Context, Result};
use classhash::dataset::{self, Dataset, Row};
use classhash::display::DisplaySettings;
use classhash::preferences::{JsonFileStore, MemoryStore, PreferenceStore, Preferences};
use classhash::{LookupUi, SearchOutcome, match_query};

use crate::settings::ResolvedConfig;

/// Coordinates loading the dataset and running lookups against it.
pub(crate) struct LookupWorkflow {
	dataset: Dataset,
	config: ResolvedConfig,
}

impl LookupWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let dataset = load_dataset(&config)?;
		Ok(Self { dataset, config })
	}

	/// Rows matching `query`, in dataset order.
	pub(crate) fn lookup(&self, query: &str) -> Vec<&Row> {
		match_query(query, &self.dataset)
			.resolve(&self.dataset)
			.collect()
	}

	/// Display settings for non-interactive output.
	pub(crate) fn display_settings(&self) -> DisplaySettings {
		let display_hex = self
			.config
			.display_hex
			.unwrap_or_else(|| Preferences::new(self.open_store()).display_hex());
		DisplaySettings::new(display_hex)
	}

	/// Run the interactive session.
	pub(crate) fn run(self) -> Result<SearchOutcome> {
		let store = self.open_store();
		let mut ui = LookupUi::new(self.dataset)
			.with_preferences(store)
			.with_labels(self.config.labels());
		if let Some(theme) = &self.config.theme {
			ui = ui.with_theme_name(theme);
		}
		if let Some(query) = self.config.initial_query {
			ui = ui.with_initial_query(query);
		}
		if let Some(display_hex) = self.config.display_hex {
			ui = ui.with_display_hex(display_hex);
		}
		ui.run()
	}

	fn open_store(&self) -> Box<dyn PreferenceStore> {
		match &self.config.preferences_path {
			Some(path) => Box::new(JsonFileStore::open(path)),
			None => Box::new(MemoryStore::default()),
		}
	}
}

fn load_dataset(config: &ResolvedConfig) -> Result<Dataset> {
	let mut entries = dataset::load_entries(&config.dataset_path)
		.with_context(|| format!("failed to load dataset {}", config.dataset_path.display()))?;
	if config.dedupe {
		entries = dataset::dedupe(entries);
	}
	Ok(Dataset::prepare(entries))
}
