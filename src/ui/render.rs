use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::components::{
	InputContext, TableSpec, build_class_rows, render_calculator, render_input, render_table,
	render_tabs, visible_rows,
};
use super::state::{App, Tab};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		let titles: Vec<&str> = Tab::ALL
			.iter()
			.map(|tab| match tab {
				Tab::Search => self.labels.search_tab.as_str(),
				Tab::Hash => self.labels.hash_tab.as_str(),
			})
			.collect();
		render_tabs(frame, layout[0], &titles, self.tab.index(), &self.theme);

		let status = self.status_text();
		let (input, placeholder) = match self.tab {
			Tab::Search => (&self.search_input, self.labels.search_placeholder.as_str()),
			Tab::Hash => (&self.hash_input, self.labels.hash_placeholder.as_str()),
		};
		render_input(
			frame,
			InputContext {
				search_input: input,
				placeholder,
				status: &status,
				area: layout[1],
				theme: &self.theme,
			},
		);

		match self.tab {
			Tab::Search => self.render_results(frame, layout[2]),
			Tab::Hash => {
				self.results_area = None;
				render_calculator(
					frame,
					layout[2],
					&self.labels.hash_heading,
					self.hash_input.text(),
					self.settings,
					&self.theme,
				);
			}
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		self.results_area = Some(area.inner(Margin {
			vertical: 1,
			horizontal: 1,
		}));

		let window = self.results.visible_window(visible_rows(area));
		let selected = self
			.results
			.selected
			.and_then(|position| position.checked_sub(window.start));
		let rows = build_class_rows(
			&self.results.result,
			window,
			&self.dataset,
			self.settings,
			&self.theme,
		);

		let spec = TableSpec {
			headers: [
				self.labels.class_ref_header.clone(),
				self.labels.stride_header.clone(),
			],
			rows,
			title: self.table_title(),
			selected,
			needs_scrollbar: self.results.needs_scrollbar(),
			empty_message: "No results",
		};
		render_table(
			frame,
			area,
			&mut self.results.scrollbar_state,
			spec,
			&self.theme,
		);
	}
}
