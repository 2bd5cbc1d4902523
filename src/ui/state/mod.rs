//! Session state for the lookup UI.

mod results;

use ratatui::layout::Rect;

pub(crate) use results::ResultsState;

use crate::dataset::Dataset;
use crate::display::DisplaySettings;
use crate::preferences::{PreferenceStore, Preferences};
use crate::search::match_query;
use crate::ui::config::UiLabels;
use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// The two views of the lookup UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
	#[default]
	Search,
	Hash,
}

impl Tab {
	pub(crate) const ALL: [Tab; 2] = [Tab::Search, Tab::Hash];

	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Tab::Search => Tab::Hash,
			Tab::Hash => Tab::Search,
		}
	}

	pub(crate) fn index(self) -> usize {
		match self {
			Tab::Search => 0,
			Tab::Hash => 1,
		}
	}
}

/// Preferences handle used by the UI, independent of the backing store.
pub type SessionPreferences = Preferences<Box<dyn PreferenceStore>>;

/// Everything a running session owns.
pub(crate) struct App<'a> {
	pub dataset: Dataset,
	pub tab: Tab,
	pub search_input: SearchInput<'a>,
	pub hash_input: SearchInput<'a>,
	pub results: ResultsState,
	pub settings: DisplaySettings,
	pub labels: UiLabels,
	pub theme: Theme,
	pub preferences: SessionPreferences,
	/// Inner table area from the last draw, used for mouse hit testing.
	pub results_area: Option<Rect>,
}

impl<'a> App<'a> {
	/// Start a session, seeding the query and the hex toggle from `preferences`.
	pub fn new(dataset: Dataset, preferences: SessionPreferences) -> Self {
		let query = preferences.search_value();
		let settings = DisplaySettings::new(preferences.display_hex());
		let results = ResultsState::new(match_query(&query, &dataset));
		Self {
			dataset,
			tab: Tab::default(),
			search_input: SearchInput::new(query),
			hash_input: SearchInput::new(""),
			results,
			settings,
			labels: UiLabels::default(),
			theme: Theme::default(),
			preferences,
			results_area: None,
		}
	}

	/// Replace the query without persisting it.
	pub fn set_query(&mut self, query: &str) {
		self.search_input.set_text(query);
		self.refresh_results();
	}

	pub fn set_display_hex(&mut self, display_hex: bool) {
		self.settings = DisplaySettings::new(display_hex);
	}

	/// Re-run the matcher for the current query.
	pub fn refresh_results(&mut self) {
		let result = match_query(self.search_input.text(), &self.dataset);
		self.results.replace(result);
	}

	/// Run the matcher and store the query as the last search.
	pub fn query_changed(&mut self) {
		self.refresh_results();
		let query = self.search_input.text().to_string();
		if let Err(err) = self.preferences.set_search_value(&query) {
			tracing::warn!(error = %err, "failed to persist search value");
		}
	}

	/// Flip the hex toggle and store the new value.
	pub fn toggle_display_hex(&mut self) {
		self.settings = self.settings.toggled();
		if let Err(err) = self.preferences.set_display_hex(self.settings.display_hex) {
			tracing::warn!(error = %err, "failed to persist display hex");
		}
		tracing::debug!(display_hex = self.settings.display_hex, "toggled hex display");
	}

	/// Table title including the match count.
	pub fn table_title(&self) -> String {
		format!(
			" {} ({}/{}) ",
			self.labels.table_title,
			self.results.match_count(),
			self.dataset.len()
		)
	}

	/// Toggle indicator shown on the input row.
	pub fn status_text(&self) -> String {
		let mark = if self.settings.display_hex { 'x' } else { ' ' };
		format!("[{mark}] {}", self.labels.display_hex_label)
	}
}
