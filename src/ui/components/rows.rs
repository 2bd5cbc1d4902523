use std::ops::Range;

use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::dataset::Dataset;
use crate::display::{DisplaySettings, HEX_PREFIX, format_stride};
use crate::search::MatchResult;
use crate::ui::theme::Theme;

/// Build table rows for the matches at `window` positions only.
///
/// Rows alternate the stripe background by absolute position so scrolling
/// does not shift the pattern.
pub(crate) fn build_class_rows(
	result: &MatchResult,
	window: Range<usize>,
	dataset: &Dataset,
	settings: DisplaySettings,
	theme: &Theme,
) -> Vec<Row<'static>> {
	window
		.filter_map(|position| {
			let row = dataset.get(result.index_of_match(position)?)?;
			let stride = stride_cell(row.stride(), settings, theme);
			let table_row = Row::new(vec![Cell::from(row.class_ref().to_string()), stride]);
			Some(if position % 2 == 1 {
				table_row.style(theme.row_stripe)
			} else {
				table_row
			})
		})
		.collect()
}

fn stride_cell(stride: u32, settings: DisplaySettings, theme: &Theme) -> Cell<'static> {
	let text = format_stride(stride, settings);
	match text.strip_prefix(HEX_PREFIX) {
		Some(digits) => Cell::from(Line::from(vec![
			Span::styled(HEX_PREFIX, theme.empty),
			Span::raw(digits.to_string()),
		])),
		None => Cell::from(text),
	}
}
