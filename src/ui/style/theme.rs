use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub border: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.contains(&normalized)
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(160, 160, 160)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED),
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(&normalized))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}
