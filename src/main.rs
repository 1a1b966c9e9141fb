mod cli;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use lookahead::{App, HttpLookupClient, SearchOutcome, app_dirs, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in lookahead::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved.log_level);

	let outcome = run_search(resolved)?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Logging is best effort: the widget still runs when the log file is unavailable.
fn init_logging(level: &str) {
	let result = app_dirs::get_data_dir().and_then(|dir| logging::initialize(&dir, level));
	if let Err(err) = result {
		eprintln!("warning: logging disabled: {err:#}");
	}
}

fn run_search(settings: ResolvedConfig) -> Result<SearchOutcome> {
	let client = HttpLookupClient::new(&settings.endpoint, settings.timeout)
		.with_context(|| format!("failed to create lookup client for {}", settings.endpoint))?;
	tracing::info!(endpoint = %settings.endpoint, "starting lookup widget");

	let theme = settings.theme();
	let mut app = App::new(Arc::new(client));
	app.set_theme(theme);
	app.set_ui_config(settings.ui);
	app.set_timing(settings.timing);
	app.set_query(settings.initial_query);

	lookahead::run(app)
}
