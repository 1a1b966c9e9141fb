use std::time::Duration;

use lookahead::TimingConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[timing]` section as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TimingSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) tick_ms: Option<u64>,
	pub(super) min_chars: Option<usize>,
}

impl TimingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.tick_ms {
			self.tick_ms = Some(value);
		}
		if let Some(value) = cli.min_chars {
			self.min_chars = Some(value);
		}
	}

	pub(super) fn resolve(self) -> TimingConfig {
		let defaults = TimingConfig::default();
		TimingConfig {
			debounce: self
				.debounce_ms
				.map_or(defaults.debounce, Duration::from_millis),
			tick: self.tick_ms.map_or(defaults.tick, Duration::from_millis),
			min_chars: self.min_chars.unwrap_or(defaults.min_chars),
		}
	}
}
