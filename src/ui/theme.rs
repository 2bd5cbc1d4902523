//! Color themes for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for header elements.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Background applied to every other data row.
	pub row_stripe: Style,
	/// Style for the prompt marker.
	pub prompt: Style,
	/// Style for muted text such as placeholders and the `0x` prefix.
	pub empty: Style,
	/// Style for emphasized values.
	pub highlight: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the active tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.header.bg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Returns the border and separator style.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	row_stripe: Style::new().bg(Color::Rgb(22, 30, 46)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	row_stripe: Style::new().bg(Color::Rgb(241, 245, 249)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
};

const BUILTINS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	BUILTINS
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}

/// Names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _)| *name).collect()
}
