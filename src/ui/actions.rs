use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SearchOutcome};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => Some(self.outcome(false)),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				Some(self.outcome(false))
			}
			KeyCode::Enter => Some(self.outcome(true)),
			_ => {
				if self.search_input.input(key) {
					self.input_changed(now);
				}
				None
			}
		}
	}

	fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			query: self.query().to_string(),
			result: if accepted { self.result().cloned() } else { None },
		}
	}
}
