//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Text input used for the search query and the hash calculator.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
		};
		input.set_text(initial);
		input
	}

	/// Current contents of the input.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents, leaving the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.replace(['\r', '\n'], "");
		let mut textarea = TextArea::new(vec![single_line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		self.textarea = textarea;
	}

	/// Forward a key press to the editor. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key) && self.text() != before
	}

	/// Insert pasted text at the cursor with line breaks removed.
	/// Returns `true` when the text changed.
	pub fn paste(&mut self, text: &str) -> bool {
		let single_line = text.replace(['\r', '\n'], "");
		!single_line.is_empty() && self.textarea.insert_str(single_line)
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
