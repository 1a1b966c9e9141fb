use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  Endpoint: {}", config.endpoint);
	let _ = writeln!(out, "  Request timeout: {}s", config.timeout.as_secs());
	let _ = writeln!(out, "  Debounce: {}ms", config.timing.debounce.as_millis());
	let _ = writeln!(out, "  Reveal tick: {}ms", config.timing.tick.as_millis());
	let _ = writeln!(out, "  Minimum characters: {}", config.timing.min_chars);
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	let _ = writeln!(out, "  Title: {}", config.ui.title);
	let _ = writeln!(out, "  Placeholder: {}", config.ui.placeholder);
	let _ = writeln!(out, "  Empty message: {}", config.ui.empty_message);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}
