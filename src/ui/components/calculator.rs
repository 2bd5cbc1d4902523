use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::display::{DisplaySettings, HEX_PREFIX, format_hash};
use crate::hash::fnv1_32;
use crate::ui::theme::Theme;

/// Render the hash of `input` inside a bordered pane.
pub(crate) fn render_calculator(
	frame: &mut Frame,
	area: Rect,
	heading: &str,
	input: &str,
	settings: DisplaySettings,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(heading.to_string());

	let text = format_hash(fnv1_32(input), settings);
	let value = match text.strip_prefix(HEX_PREFIX) {
		Some(digits) => Line::from(vec![
			Span::styled(HEX_PREFIX, theme.empty),
			Span::styled(digits.to_string(), theme.highlight),
		]),
		None => Line::from(Span::styled(text, theme.highlight)),
	};

	frame.render_widget(Paragraph::new(value).block(block), area);
}
