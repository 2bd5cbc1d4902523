//! Selection and viewport state for the results table.

use std::ops::Range;

use ratatui::widgets::ScrollbarState;

use crate::search::MatchResult;

/// Scrolling metrics for the current viewport and result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_rows: usize,
	pub max_offset: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute metrics for `content_length` rows shown `viewport_rows` at a time.
	pub fn compute(content_length: usize, viewport_rows: usize) -> Self {
		if content_length == 0 || viewport_rows == 0 {
			return Self::default();
		}
		Self {
			content_length,
			viewport_rows,
			max_offset: content_length.saturating_sub(viewport_rows),
			needs_scrollbar: content_length > viewport_rows,
		}
	}

	/// Convert a row offset into a scrollbar position.
	pub fn scrollbar_position(&self, offset: usize) -> usize {
		if self.max_offset == 0 {
			0
		} else {
			offset.saturating_mul(self.content_length.saturating_sub(1)) / self.max_offset
		}
	}
}

/// Current matches plus the selected row and the visible window.
///
/// Positions count matches only; the header entry of the [`MatchResult`] is
/// rendered separately and never selectable.
#[derive(Debug)]
pub(crate) struct ResultsState {
	pub result: MatchResult,
	pub selected: Option<usize>,
	pub offset: usize,
	pub viewport_rows: usize,
	pub scrollbar_state: ScrollbarState,
}

impl ResultsState {
	pub fn new(result: MatchResult) -> Self {
		let mut state = Self {
			result,
			selected: None,
			offset: 0,
			viewport_rows: 0,
			scrollbar_state: ScrollbarState::default(),
		};
		state.ensure_selection();
		state
	}

	/// Swap in a freshly computed result, keeping the selection in range.
	pub fn replace(&mut self, result: MatchResult) {
		self.result = result;
		self.selected = None;
		self.offset = 0;
		self.ensure_selection();
	}

	pub fn match_count(&self) -> usize {
		self.result.match_count()
	}

	/// Dataset index of the selected row.
	pub fn selected_index(&self) -> Option<usize> {
		self.result.index_of_match(self.selected?)
	}

	/// Ensure the selection remains valid for the current matches.
	pub fn ensure_selection(&mut self) {
		let len = self.match_count();
		self.selected = match self.selected {
			_ if len == 0 => None,
			None => Some(0),
			Some(selected) => Some(selected.min(len - 1)),
		};
	}

	pub fn move_up(&mut self, rows: usize) {
		if let Some(selected) = self.selected {
			self.selected = Some(selected.saturating_sub(rows));
		}
	}

	pub fn move_down(&mut self, rows: usize) {
		if let Some(selected) = self.selected {
			let last = self.match_count().saturating_sub(1);
			self.selected = Some(selected.saturating_add(rows).min(last));
		}
	}

	pub fn select_first(&mut self) {
		if self.match_count() > 0 {
			self.selected = Some(0);
		}
	}

	pub fn select_last(&mut self) {
		if let Some(last) = self.match_count().checked_sub(1) {
			self.selected = Some(last);
		}
	}

	/// Rows to move for a page jump, based on the last rendered viewport.
	pub fn page_rows(&self) -> usize {
		self.viewport_rows.max(1)
	}

	/// Fit the window to `viewport_rows` rows and return the visible positions.
	///
	/// The offset only moves as far as needed to keep the selection visible.
	pub fn visible_window(&mut self, viewport_rows: usize) -> Range<usize> {
		self.viewport_rows = viewport_rows;
		let metrics = ScrollMetrics::compute(self.match_count(), viewport_rows);

		if let Some(selected) = self.selected {
			if selected < self.offset {
				self.offset = selected;
			} else if viewport_rows > 0 && selected >= self.offset + viewport_rows {
				self.offset = selected + 1 - viewport_rows;
			}
		}
		self.offset = self.offset.min(metrics.max_offset);

		self.scrollbar_state = if metrics.needs_scrollbar {
			ScrollbarState::new(metrics.content_length)
				.viewport_content_length(metrics.viewport_rows)
				.position(metrics.scrollbar_position(self.offset))
		} else {
			ScrollbarState::default()
		};

		let end = self
			.offset
			.saturating_add(viewport_rows)
			.min(self.match_count());
		self.offset..end
	}

	/// Whether the last computed window overflows the viewport.
	pub fn needs_scrollbar(&self) -> bool {
		ScrollMetrics::compute(self.match_count(), self.viewport_rows).needs_scrollbar
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state_with(count: usize) -> ResultsState {
		ResultsState::new(MatchResult::from_matches(0..count))
	}

	#[test]
	fn selection_starts_at_first_match() {
		assert_eq!(state_with(3).selected, Some(0));
		assert_eq!(state_with(0).selected, None);
	}

	#[test]
	fn moves_are_clamped() {
		let mut state = state_with(3);
		state.move_up(1);
		assert_eq!(state.selected, Some(0));
		state.move_down(10);
		assert_eq!(state.selected, Some(2));
		state.select_first();
		assert_eq!(state.selected, Some(0));
		state.select_last();
		assert_eq!(state.selected_index(), Some(2));
	}

	#[test]
	fn window_follows_selection() {
		let mut state = state_with(100);
		assert_eq!(state.visible_window(10), 0..10);

		state.move_down(15);
		assert_eq!(state.visible_window(10), 6..16);

		state.move_up(12);
		assert_eq!(state.visible_window(10), 3..13);

		state.select_last();
		assert_eq!(state.visible_window(10), 90..100);
		assert!(state.needs_scrollbar());
	}

	#[test]
	fn window_shrinks_to_available_rows() {
		let mut state = state_with(4);
		assert_eq!(state.visible_window(10), 0..4);
		assert!(!state.needs_scrollbar());
		assert_eq!(state.visible_window(0), 0..0);
	}

	#[test]
	fn replacing_results_resets_the_window() {
		let mut state = state_with(50);
		state.move_down(40);
		state.visible_window(10);
		state.replace(MatchResult::from_matches([7, 9]));
		assert_eq!(state.selected, Some(0));
		assert_eq!(state.selected_index(), Some(7));
		assert_eq!(state.visible_window(10), 0..2);
	}

	#[test]
	fn scrollbar_position_spans_content() {
		let metrics = ScrollMetrics::compute(100, 10);
		assert_eq!(metrics.max_offset, 90);
		assert_eq!(metrics.scrollbar_position(0), 0);
		assert_eq!(metrics.scrollbar_position(90), 99);
	}
}
