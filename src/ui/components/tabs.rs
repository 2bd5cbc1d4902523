use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Marker rendered in front of the input.
pub(crate) const PROMPT: &str = "> ";

/// Argument bundle for rendering the input area.
pub(crate) struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: &'a str,
	/// Muted status shown at the right edge, such as the match count.
	pub status: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the tab bar with `selected` highlighted.
pub(crate) fn render_tabs(
	frame: &mut Frame,
	area: Rect,
	titles: &[&str],
	selected: usize,
	theme: &Theme,
) {
	let lines: Vec<Line<'static>> = titles
		.iter()
		.enumerate()
		.map(|(index, title)| {
			let style = if index == selected {
				theme.tab_highlight_style()
			} else {
				theme.tab_inactive_style()
			};
			Line::from(format!(" {title} ")).style(style)
		})
		.collect();

	let tabs = Tabs::new(lines)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(tabs, area);
}

/// Render the prompt marker, the input and its placeholder or status.
pub(crate) fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		placeholder,
		status,
		area,
		theme,
	} = input;

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(PROMPT.len() as u16), Constraint::Min(1)])
		.split(area);

	frame.render_widget(Paragraph::new(PROMPT).style(theme.prompt), horizontal[0]);

	let input_area = horizontal[1];
	search_input.render_textarea(frame, input_area);
	if search_input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}
	render_status(frame, input_area, status, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty)),
		area.width,
	);
}

/// Right-align `text` on the input row without overlapping typed text.
fn render_status(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(text.to_string(), theme.empty));
	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|x| {
			buffer
				.cell((*x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
