//! Interactive terminal UI for `lookahead`.
//!
//! [`App`] holds the widget state and the transitions that drive it; the
//! [`run`] entry point owns the terminal and the event loop. The remaining
//! submodules implement rendering, the reusable widgets and the colour
//! themes.

mod actions;
pub mod components;
mod config;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use config::{TimingConfig, UiConfig};
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use state::App;
pub use style::Theme;
