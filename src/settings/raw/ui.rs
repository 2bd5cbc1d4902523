use serde::Deserialize;

use super::super::util::{non_blank, sanitize_headers};
use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) display_hex: Option<bool>,
	pub(super) table_title: Option<String>,
	pub(super) headers: Option<Vec<String>>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) display_hex: Option<bool>,
	pub(super) table_title: Option<String>,
	pub(super) headers: Option<Vec<String>>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(display_hex) = cli.display_hex {
			self.display_hex = Some(display_hex);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			theme: non_blank(self.theme),
			initial_query: self.initial_query,
			display_hex: self.display_hex,
			table_title: non_blank(self.table_title),
			headers: self.headers.map(sanitize_headers),
		}
	}
}
