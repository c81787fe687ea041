use ratatui::style::{Color, Modifier, Style};

/// Colour scheme for every element of the search view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub prompt: Style,
	pub placeholder: Style,
	pub button: Style,
	pub button_disabled: Style,
	pub error: Style,
	pub heading: Style,
	pub item_title: Style,
	pub item_description: Style,
	pub row_highlight: Style,
	pub empty: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	/// Style of the submit control, dimmed while a request is in flight.
	#[must_use]
	pub fn button_style(&self, enabled: bool) -> Style {
		if enabled {
			self.button
		} else {
			self.button_disabled
		}
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn heading_style(&self) -> Style {
		self.heading
	}

	#[must_use]
	pub fn item_title_style(&self) -> Style {
		self.item_title
	}

	#[must_use]
	pub fn item_description_style(&self) -> Style {
		self.item_description
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(226, 232, 240)),
	placeholder: Style::new().fg(Color::Rgb(100, 116, 139)),
	button: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(59, 130, 246)),
	button_disabled: Style::new()
		.fg(Color::Rgb(203, 213, 225))
		.bg(Color::Rgb(71, 85, 105)),
	error: Style::new()
		.fg(Color::Rgb(254, 202, 202))
		.bg(Color::Rgb(127, 29, 29)),
	heading: Style::new()
		.fg(Color::Rgb(147, 197, 253))
		.add_modifier(Modifier::BOLD),
	item_title: Style::new()
		.fg(Color::Rgb(241, 245, 249))
		.add_modifier(Modifier::BOLD),
	item_description: Style::new().fg(Color::Rgb(148, 163, 184)),
	row_highlight: Style::new().bg(Color::Rgb(30, 41, 59)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(15, 23, 42)),
	placeholder: Style::new().fg(Color::Rgb(148, 163, 184)),
	button: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(37, 99, 235)),
	button_disabled: Style::new()
		.fg(Color::Rgb(100, 116, 139))
		.bg(Color::Rgb(226, 232, 240)),
	error: Style::new()
		.fg(Color::Rgb(185, 28, 28))
		.bg(Color::Rgb(254, 226, 226)),
	heading: Style::new()
		.fg(Color::Rgb(30, 64, 175))
		.add_modifier(Modifier::BOLD),
	item_title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	item_description: Style::new().fg(Color::Rgb(75, 85, 99)),
	row_highlight: Style::new().bg(Color::Rgb(226, 232, 240)),
	empty: Style::new().fg(Color::Rgb(107, 114, 128)),
};

pub const SOLARIZED: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(147, 161, 161)),
	placeholder: Style::new().fg(Color::Rgb(88, 110, 117)),
	button: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(38, 139, 210)),
	button_disabled: Style::new()
		.fg(Color::Rgb(88, 110, 117))
		.bg(Color::Rgb(7, 54, 66)),
	error: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(220, 50, 47)),
	heading: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	item_title: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.add_modifier(Modifier::BOLD),
	item_description: Style::new().fg(Color::Rgb(131, 148, 150)),
	row_highlight: Style::new().bg(Color::Rgb(7, 54, 66)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
};

struct ThemeDefinition {
	name: &'static str,
	aliases: &'static [&'static str],
	theme: Theme,
}

const BUILTINS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		aliases: &["default", "dark"],
		theme: SLATE,
	},
	ThemeDefinition {
		name: "light",
		aliases: &[],
		theme: LIGHT,
	},
	ThemeDefinition {
		name: "solarized",
		aliases: &["solarized-dark"],
		theme: SOLARIZED,
	},
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|definition| definition.name).collect()
}

/// Look a theme up by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTINS
		.iter()
		.find(|definition| {
			definition.name.eq_ignore_ascii_case(name)
				|| definition
					.aliases
					.iter()
					.any(|alias| alias.eq_ignore_ascii_case(name))
		})
		.map(|definition| definition.theme)
}
