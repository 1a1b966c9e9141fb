//! Core state container for the widget.
//!
//! [`App`] owns the query input, the dispatcher's result slot, the debounce
//! gate and the reveal animation. It is only ever mutated from the UI thread
//! through the transition methods in `ui::search` and `ui::actions`, which is
//! what lets tests drive it with synthetic instants and no terminal.

use std::sync::Arc;

use throbber_widgets_tui::ThrobberState;

use super::QueryDispatcher;
use crate::systems::debounce::Debouncer;
use crate::systems::lookup::{self, LookupClient, LookupRecord};
use crate::systems::reveal::RevealAnimator;
use crate::ui::components::SearchInput;
use crate::ui::config::{TimingConfig, UiConfig};
use crate::ui::style::Theme;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.lookup.shutdown();
	}
}

pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) timing: TimingConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) debouncer: Debouncer<String>,
	pub(in crate::ui) lookup: QueryDispatcher,
	pub(crate) reveal: RevealAnimator,
}

impl<'a> App<'a> {
	/// Construct an [`App`] that resolves queries through `client` on a background worker.
	pub fn new(client: Arc<dyn LookupClient>) -> Self {
		let (lookup_tx, lookup_rx) = lookup::spawn(client);
		Self::with_dispatcher(QueryDispatcher::new(lookup_tx, lookup_rx))
	}

	pub(crate) fn with_dispatcher(lookup: QueryDispatcher) -> Self {
		let timing = TimingConfig::default();
		let theme = Theme::default();
		let ui = UiConfig::default();
		let mut search_input = SearchInput::new("");
		search_input.set_placeholder(ui.placeholder.clone(), theme.empty_style());
		Self {
			search_input,
			ui,
			theme,
			timing,
			throbber_state: ThrobberState::default(),
			debouncer: Debouncer::new(timing.debounce),
			lookup,
			reveal: RevealAnimator::new(timing.tick),
		}
	}

	/// Replace the UI labels.
	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.search_input
			.set_placeholder(ui.placeholder.clone(), self.theme.empty_style());
		self.ui = ui;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.ui.placeholder.clone(), theme.empty_style());
	}

	/// Replace the query text without running it through the debounce gate.
	///
	/// The event loop treats a non-empty query as an edit when it starts.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let mut search_input = SearchInput::new(query);
		search_input.set_placeholder(self.ui.placeholder.clone(), self.theme.empty_style());
		self.search_input = search_input;
	}

	/// Replace the pipeline timings. Pending input and animation state are dropped.
	pub fn set_timing(&mut self, timing: TimingConfig) {
		self.timing = timing;
		self.debouncer = Debouncer::new(timing.debounce);
		self.reveal = RevealAnimator::new(timing.tick);
	}

	/// The text currently typed into the input.
	#[must_use]
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Whether a lookup for the latest query is still in flight.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.lookup.is_loading()
	}

	/// The record currently held in the result slot.
	#[must_use]
	pub fn result(&self) -> Option<&LookupRecord> {
		self.lookup.result()
	}

	/// The animated prefix of the current record's description.
	#[must_use]
	pub fn revealed_text(&self) -> &str {
		self.reveal.visible_text()
	}

	#[must_use]
	pub fn timing(&self) -> TimingConfig {
		self.timing
	}
}
