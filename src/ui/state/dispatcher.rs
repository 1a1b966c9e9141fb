use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::systems::lookup::{LookupCommand, LookupError, LookupRecord, LookupResponse};

/// What happened when a response was handed to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LookupEvent {
	/// The latest request succeeded and its record is now current.
	Accepted,
	/// The latest request failed; the previous record is retained.
	Failed,
	/// The response belongs to a superseded request and was dropped.
	Stale,
}

/// Issues lookups and owns the single result slot and the loading flag.
///
/// Every request gets a fresh id; only the response carrying the most
/// recently issued id may settle the request. Earlier responses are stale no
/// matter when they arrive.
pub(crate) struct QueryDispatcher {
	tx: Sender<LookupCommand>,
	rx: Receiver<LookupResponse>,
	next_request_id: u64,
	current_request_id: Option<u64>,
	in_flight: bool,
	result: Option<LookupRecord>,
}

impl QueryDispatcher {
	pub(crate) fn new(tx: Sender<LookupCommand>, rx: Receiver<LookupResponse>) -> Self {
		Self {
			tx,
			rx,
			next_request_id: 0,
			current_request_id: None,
			in_flight: false,
			result: None,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(LookupCommand::Shutdown);
	}

	/// Send a lookup for `term`, superseding any request still in flight.
	pub(crate) fn fetch(&mut self, term: String) -> u64 {
		self.next_request_id = self.next_request_id.saturating_add(1);
		let id = self.next_request_id;
		self.current_request_id = Some(id);
		self.in_flight = true;
		tracing::info!(id, term = %term, "dispatching lookup");
		if self.tx.send(LookupCommand::Fetch { id, term }).is_err() {
			tracing::warn!(id, error = %LookupError::WorkerGone, "lookup not sent");
			self.in_flight = false;
		}
		id
	}

	/// Drop the current record and invalidate every outstanding request.
	pub(crate) fn clear(&mut self) {
		self.current_request_id = None;
		self.in_flight = false;
		self.result = None;
	}

	pub(crate) fn matches_latest(&self, request_id: u64) -> bool {
		Some(request_id) == self.current_request_id
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn result(&self) -> Option<&LookupRecord> {
		self.result.as_ref()
	}

	pub(crate) fn try_recv(&mut self) -> Result<LookupResponse, TryRecvError> {
		self.rx.try_recv()
	}

	/// Settle the request a response belongs to, if it is still the latest.
	pub(crate) fn handle_response(&mut self, response: LookupResponse) -> LookupEvent {
		let LookupResponse { id, term, outcome } = response;
		if !self.matches_latest(id) {
			tracing::debug!(id, term = %term, "discarding stale lookup response");
			return LookupEvent::Stale;
		}

		self.in_flight = false;
		match outcome {
			Ok(record) => {
				tracing::debug!(id, term = %term, title = %record.title, "lookup settled");
				self.result = Some(record);
				LookupEvent::Accepted
			}
			Err(err) => {
				tracing::warn!(id, term = %term, error = %err, "lookup failed");
				LookupEvent::Failed
			}
		}
	}
}
