use lookahead::LookupError;
use lookahead::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Err(err) = lookahead::parse_endpoint(&config.endpoint) {
		let reason = match err {
			LookupError::InvalidEndpoint { reason, .. } => reason,
			other => other.to_string(),
		};
		return Err(ConfigError::invalid(
			"lookup.endpoint",
			config.endpoint.clone(),
			ConfigSources::source_or_key(&sources.endpoint, "lookup.endpoint"),
			reason,
		));
	}

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"lookup.timeout_secs",
			"0",
			ConfigSources::source_or_key(&sources.timeout, "lookup.timeout_secs"),
			"must be greater than zero",
		));
	}

	if config.timing.debounce.is_zero() {
		return Err(ConfigError::invalid(
			"timing.debounce_ms",
			"0",
			ConfigSources::source_or_key(&sources.debounce, "timing.debounce_ms"),
			"must be greater than zero",
		));
	}

	if config.timing.tick.is_zero() {
		return Err(ConfigError::invalid(
			"timing.tick_ms",
			"0",
			ConfigSources::source_or_key(&sources.tick, "timing.tick_ms"),
			"must be greater than zero",
		));
	}

	if config.timing.min_chars == 0 {
		return Err(ConfigError::invalid(
			"timing.min_chars",
			"0",
			ConfigSources::source_or_key(&sources.min_chars, "timing.min_chars"),
			"must be at least 1",
		));
	}

	if style::by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme_name.clone(),
			ConfigSources::source_or_key(&sources.theme, "ui.theme"),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}
