use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::ui::theme::Theme;

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area left for content.
pub(crate) fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());

	let bar_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar_area, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
