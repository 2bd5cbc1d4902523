use anyhow::Result;

use super::config::UiLabels;
use super::state::{App, SessionPreferences};
use super::theme::{self, Theme};
use crate::dataset::Dataset;
use crate::preferences::{MemoryStore, PreferenceStore, Preferences};
use crate::search::SearchOutcome;

/// A small builder for configuring the interactive lookup UI.
///
/// Without explicit overrides the session resumes the last query and hex
/// setting from its preference store.
pub struct LookupUi {
	dataset: Dataset,
	preferences: SessionPreferences,
	initial_query: Option<String>,
	display_hex: Option<bool>,
	labels: UiLabels,
	theme: Theme,
}

impl LookupUi {
	/// Create a lookup UI over `dataset` with in-memory preferences.
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			preferences: Preferences::new(Box::new(MemoryStore::default())),
			initial_query: None,
			display_hex: None,
			labels: UiLabels::default(),
			theme: Theme::default(),
		}
	}

	/// Read and persist preferences through `store`.
	pub fn with_preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
		self.preferences = Preferences::new(Box::new(store));
		self
	}

	/// Start from `query` instead of the stored search value.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_display_hex(mut self, display_hex: bool) -> Self {
		self.display_hex = Some(display_hex);
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Use a built-in theme. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = theme;
		} else {
			tracing::warn!(name, "unknown theme");
		}
		self
	}

	pub(crate) fn build(self) -> App<'static> {
		let mut app = App::new(self.dataset, self.preferences);
		app.labels = self.labels;
		app.theme = self.theme;
		if let Some(query) = self.initial_query {
			app.set_query(&query);
		}
		if let Some(display_hex) = self.display_hex {
			app.set_display_hex(display_hex);
		}
		app
	}

	/// Run the interactive session until the user accepts or cancels.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.build();
		app.run()
	}
}
