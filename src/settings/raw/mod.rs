use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod lookup;
mod timing;
mod ui;

use lookup::LookupSection;
use timing::TimingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	lookup: LookupSection,
	timing: TimingSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.lookup.apply_cli_overrides(cli);
		self.timing.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.lookup.endpoint.is_some(),
				"LOOKAHEAD__LOOKUP__ENDPOINT",
				"--endpoint",
				"lookup.endpoint",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.lookup.timeout_secs.is_some(),
				"LOOKAHEAD__LOOKUP__TIMEOUT_SECS",
				"--timeout-secs",
				"lookup.timeout_secs",
			),
			debounce: detect_source(
				cli.debounce_ms.is_some(),
				self.timing.debounce_ms.is_some(),
				"LOOKAHEAD__TIMING__DEBOUNCE_MS",
				"--debounce-ms",
				"timing.debounce_ms",
			),
			tick: detect_source(
				cli.tick_ms.is_some(),
				self.timing.tick_ms.is_some(),
				"LOOKAHEAD__TIMING__TICK_MS",
				"--tick-ms",
				"timing.tick_ms",
			),
			min_chars: detect_source(
				cli.min_chars.is_some(),
				self.timing.min_chars.is_some(),
				"LOOKAHEAD__TIMING__MIN_CHARS",
				"--min-chars",
				"timing.min_chars",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"LOOKAHEAD__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let (endpoint, timeout) = self.lookup.resolve();
		let timing = self.timing.resolve();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			endpoint,
			timeout,
			timing,
			ui: ui.ui,
			theme_name: ui.theme,
			initial_query: ui.initial_query,
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| lookahead::logging::DEFAULT_LEVEL.to_string()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
