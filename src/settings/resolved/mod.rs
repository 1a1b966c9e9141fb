use std::time::Duration;

use lookahead::ui::style;
use lookahead::{Theme, TimingConfig, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub timeout: Duration,
	pub timing: TimingConfig,
	pub ui: UiConfig,
	pub theme_name: String,
	pub initial_query: String,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The selected colour theme. Validation guarantees the name resolves.
	pub fn theme(&self) -> Theme {
		style::by_name(&self.theme_name).unwrap_or_default()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
