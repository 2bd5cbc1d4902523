use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use super::render_scrollbar;
use crate::ui::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row plus separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
/// Width reserved for the stride column.
pub(crate) const STRIDE_COLUMN_WIDTH: u16 = 14;

/// Fully materialized table configuration.
pub(crate) struct TableSpec<'a> {
	pub headers: [String; 2],
	/// Rows for the visible window only.
	pub rows: Vec<Row<'a>>,
	pub title: String,
	/// Selected row relative to the window.
	pub selected: Option<usize>,
	pub needs_scrollbar: bool,
	pub empty_message: &'a str,
}

/// Number of data rows that fit in a bordered table drawn in `area`.
pub(crate) fn visible_rows(area: Rect) -> usize {
	area.height
		.saturating_sub(2)
		.saturating_sub(TABLE_HEADER_ROWS) as usize
}

/// Render the bordered results table.
pub(crate) fn render_table(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(spec.title.clone());

	let inner = block.inner(area);
	frame.render_widget(block, area);
	render_configured_table(frame, inner, scrollbar_state, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);

	let table_area = if spec.needs_scrollbar {
		render_scrollbar(frame, area, scrollbar_state, theme)
	} else {
		area
	};

	let is_empty = spec.rows.is_empty();
	let mut table_state = TableState::default().with_selected(spec.selected);
	let table = Table::new(
		spec.rows,
		[Constraint::Fill(1), Constraint::Length(STRIDE_COLUMN_WIDTH)],
	)
	.header(header)
	.column_spacing(TABLE_COLUMN_SPACING)
	.highlight_spacing(HighlightSpacing::Always)
	.row_highlight_style(theme.row_highlight)
	.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, &mut table_state);

	render_header_separator(frame, table_area, theme);

	if is_empty {
		render_empty_message(frame, table_area, spec.empty_message, theme);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let width = area.width as usize;
	let sep_rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let line = if width <= 2 {
		Line::from(" ".repeat(width))
	} else {
		Line::from(vec![
			Span::raw(" "),
			Span::styled("─".repeat(width - 2), theme.border_style()),
			Span::raw(" "),
		])
	};
	frame.render_widget(Paragraph::new(line), sep_rect);
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	if area.height <= TABLE_HEADER_ROWS {
		return;
	}
	let message_area = Rect {
		y: area.y + TABLE_HEADER_ROWS,
		height: 1,
		..area
	};
	let empty = Paragraph::new(message)
		.style(theme.empty)
		.alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}
