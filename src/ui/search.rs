use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::App;
use super::state::LookupEvent;
use crate::systems::lookup::LookupResponse;

impl<'a> App<'a> {
	/// React to an edit of the query text.
	///
	/// Queries shorter than the configured minimum clear the result slot right
	/// away and cancel any pending lookup; longer ones are handed to the
	/// debouncer.
	pub fn input_changed(&mut self, now: Instant) {
		let query = self.search_input.text().to_string();
		if query.chars().count() < self.timing.min_chars {
			self.debouncer.cancel();
			self.lookup.clear();
			self.reveal.clear();
			tracing::debug!(query = %query, "query below minimum length; result cleared");
			return;
		}
		self.debouncer.schedule(query, now);
	}

	/// Advance every time-driven part of the pipeline up to `now`.
	///
	/// Order matters: a debounced query is dispatched first, then settled
	/// responses are applied (which may restart the reveal), then due reveal
	/// ticks fire.
	pub fn tick(&mut self, now: Instant) {
		if let Some(term) = self.debouncer.poll(now) {
			self.lookup.fetch(term);
		}
		self.pump_lookup_responses(now);
		self.reveal.advance(now);
	}

	/// Drain any lookup responses waiting on the receiver channel.
	pub(crate) fn pump_lookup_responses(&mut self, now: Instant) {
		loop {
			match self.lookup.try_recv() {
				Ok(response) => self.handle_lookup_response(response, now),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a lookup response and restart the reveal if it produced a new record.
	pub(crate) fn handle_lookup_response(&mut self, response: LookupResponse, now: Instant) {
		if self.lookup.handle_response(response) != LookupEvent::Accepted {
			return;
		}
		// Every accepted fetch restarts the reveal, even for identical text.
		if let Some(record) = self.lookup.result() {
			self.reveal.reset(record.description.clone(), now);
		}
	}
}
