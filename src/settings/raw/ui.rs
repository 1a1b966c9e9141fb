use lookahead::UiConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// `[ui]` section as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) intro: Option<String>,
	pub(super) prompt: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) empty_message: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) initial_query: String,
	pub(super) theme: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(title) = self.title {
			ui.title = title;
		}
		if let Some(intro) = self.intro {
			ui.intro = intro;
		}
		if let Some(prompt) = self.prompt {
			ui.prompt = prompt;
		}
		if let Some(placeholder) = self.placeholder {
			ui.placeholder = placeholder;
		}
		if let Some(message) = self.empty_message {
			ui.empty_message = message;
		}

		let theme = self
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		UiResolution {
			ui,
			initial_query: self.initial_query.unwrap_or_default(),
			theme,
		}
	}
}
