use serde::Serialize;

use crate::dataset::ClassEntry;

/// Captures the outcome of an interactive lookup session.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub selection: Option<ClassEntry>,
	pub query: String,
	/// Hex display setting in effect when the session ended.
	pub display_hex: bool,
}

impl SearchOutcome {
	/// Return the entry the user confirmed, if any.
	#[must_use]
	pub fn selected_entry(&self) -> Option<&ClassEntry> {
		if self.accepted {
			self.selection.as_ref()
		} else {
			None
		}
	}
}
