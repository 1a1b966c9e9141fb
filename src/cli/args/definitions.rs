use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `lookahead` binary.
#[derive(Parser, Debug)]
#[command(
	name = "lookahead",
	version,
	long_version = long_version(),
	about = "Search-as-you-type lookup with a typewriter result reveal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LOOKAHEAD_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Base URL of the lookup service (default: http://127.0.0.1:5000/qahandbook)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "timeout-secs",
		value_name = "SECS",
		help = "Abort a lookup request after this many seconds (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a query is sent (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "tick-ms",
		value_name = "MS",
		help = "Delay between revealed characters (default: 50)"
	)]
	pub(crate) tick_ms: Option<u64>,
	#[arg(
		long = "min-chars",
		value_name = "NUM",
		help = "Shortest query that triggers a lookup (default: 3)"
	)]
	pub(crate) min_chars: Option<usize>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the header title (default: Smart Policy Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
