//! Search-as-you-type lookup widget for the terminal.
//!
//! Typing into the widget is debounced, forwarded to a remote lookup service
//! once the query is long enough, and the best match is revealed one character
//! at a time. The time-driven pieces live in [`systems`] and take explicit
//! instants so they can be driven without a clock; [`ui`] wires them to the
//! terminal.

pub mod app_dirs;
pub mod logging;
pub mod systems;
pub mod ui;

pub use systems::debounce::Debouncer;
pub use systems::lookup::{
	HttpLookupClient, LookupClient, LookupError, LookupRecord, parse_endpoint,
};
pub use systems::reveal::{RevealAnimator, RevealPhase};
pub use ui::{App, SearchOutcome, Theme, TimingConfig, UiConfig, run};
