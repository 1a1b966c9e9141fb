//! Quiet-period gate for keystroke-driven work.
//!
//! The event loop owns a [`Debouncer`] and polls it with the current time on
//! every iteration instead of arming callbacks, so a superseded value can never
//! fire late: replacing the pending slot is the cancellation.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Holds the most recent input until it has been left alone for `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
	/// Create a debouncer that waits `delay` after the last call to [`schedule`](Self::schedule).
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	/// Record `value` as the latest input and restart the quiet period.
	///
	/// Any value scheduled earlier is dropped without firing.
	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Drop the pending value, returning it if one was waiting.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.value)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Instant at which the pending value becomes due.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Yield the pending value once its quiet period has elapsed.
	///
	/// Returns `None` while the deadline is in the future or nothing is pending.
	/// A value is yielded at most once.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !due {
			return None;
		}
		self.cancel()
	}
}
