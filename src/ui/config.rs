/// Human-readable labels rendered by the lookup UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Label of the search tab.
	pub search_tab: String,
	/// Label of the hash calculator tab.
	pub hash_tab: String,
	/// Placeholder shown while the search input is empty.
	pub search_placeholder: String,
	/// Placeholder shown while the calculator input is empty.
	pub hash_placeholder: String,
	/// Title of the results table.
	pub table_title: String,
	/// Column headers rendered from the header row.
	pub class_ref_header: String,
	pub stride_header: String,
	/// Heading shown above the computed hash.
	pub hash_heading: String,
	/// Label of the display-hex toggle.
	pub display_hex_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			search_tab: "Search".to_string(),
			hash_tab: "Hash".to_string(),
			search_placeholder: "Search by class ref".to_string(),
			hash_placeholder: "String to hash".to_string(),
			table_title: "Class refs".to_string(),
			class_ref_header: "Class ref".to_string(),
			stride_header: "Stride".to_string(),
			hash_heading: "FNV1-32".to_string(),
			display_hex_label: "Display hex numbers".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the table title.
	#[must_use]
	pub fn with_table_title(mut self, title: impl Into<String>) -> Self {
		self.table_title = title.into();
		self
	}

	/// Replace the two column headers.
	#[must_use]
	pub fn with_headers(mut self, class_ref: impl Into<String>, stride: impl Into<String>) -> Self {
		self.class_ref_header = class_ref.into();
		self.stride_header = stride.into();
		self
	}
}
