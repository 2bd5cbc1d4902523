use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::state::{App, Tab};
use crate::search::SearchOutcome;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

impl App<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Enter if self.tab == Tab::Search => return Some(self.outcome(true)),
			KeyCode::Tab | KeyCode::BackTab => {
				self.tab = self.tab.next();
				tracing::debug!(tab = ?self.tab, "switched tab");
			}
			KeyCode::Char('x') if ctrl => self.toggle_display_hex(),
			_ => match self.tab {
				Tab::Search => self.handle_search_key(key),
				Tab::Hash => {
					self.hash_input.input(key);
				}
			},
		}
		None
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		let page = self.results.page_rows();
		match key.code {
			KeyCode::Up => self.results.move_up(1),
			KeyCode::Down => self.results.move_down(1),
			KeyCode::PageUp => self.results.move_up(page),
			KeyCode::PageDown => self.results.move_down(page),
			KeyCode::Home => self.results.select_first(),
			KeyCode::End => self.results.select_last(),
			_ => {
				if self.search_input.input(key) {
					self.query_changed();
				}
			}
		}
	}

	/// Insert bracketed-paste text into the active tab's input.
	pub(crate) fn handle_paste(&mut self, text: &str) {
		match self.tab {
			Tab::Search => {
				if self.search_input.paste(text) {
					self.query_changed();
				}
			}
			Tab::Hash => {
				self.hash_input.paste(text);
			}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if self.tab != Tab::Search {
			return;
		}
		let Some(area) = self.results_area else {
			return;
		};
		if !point_in_rect(mouse.column, mouse.row, area) {
			return;
		}
		match mouse.kind {
			MouseEventKind::ScrollUp => self.results.move_up(WHEEL_ROWS),
			MouseEventKind::ScrollDown => self.results.move_down(WHEEL_ROWS),
			MouseEventKind::Down(MouseButton::Left) => self.select_row_at(mouse.row, area),
			_ => {}
		}
	}

	fn select_row_at(&mut self, row: u16, area: Rect) {
		let first_row = area.y + super::components::TABLE_HEADER_ROWS;
		if row < first_row {
			return;
		}
		let position = self.results.offset + usize::from(row - first_row);
		if position < self.results.match_count() {
			self.results.selected = Some(position);
		}
	}

	fn outcome(&self, accepted: bool) -> SearchOutcome {
		let selection = if accepted {
			self.results
				.selected_index()
				.and_then(|index| self.dataset.get(index))
				.map(|row| row.to_entry())
		} else {
			None
		};
		tracing::info!(accepted, query = self.search_input.text(), "session finished");
		SearchOutcome {
			accepted,
			selection,
			query: self.search_input.text().to_string(),
			display_hex: self.settings.display_hex,
		}
	}
}

/// Check if a point (column, row) is inside a rectangle.
fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}
