//! Typewriter-style reveal of a text payload.
//!
//! [`RevealAnimator`] exposes a growing prefix of its source text, one `char`
//! per tick. Every [`reset`](RevealAnimator::reset) starts a new generation;
//! ticks are tagged with the generation that scheduled them and are dropped if
//! a newer payload has arrived in the meantime.

use std::time::{Duration, Instant};

/// Observable phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
	/// No payload has been assigned.
	Idle,
	/// Part of the payload is still hidden.
	Revealing,
	/// The whole payload is visible and no ticks remain.
	Complete,
}

#[derive(Debug)]
pub struct RevealAnimator {
	interval: Duration,
	source: Option<String>,
	source_len: usize,
	visible_len: usize,
	generation: u64,
	next_tick: Option<Instant>,
}

impl RevealAnimator {
	#[must_use]
	pub fn new(interval: Duration) -> Self {
		Self {
			interval,
			source: None,
			source_len: 0,
			visible_len: 0,
			generation: 0,
			next_tick: None,
		}
	}

	/// Assign a new payload and restart the reveal from an empty prefix.
	///
	/// Returns the generation that subsequent ticks must carry. An empty
	/// payload completes immediately without scheduling a tick.
	pub fn reset(&mut self, text: impl Into<String>, now: Instant) -> u64 {
		let text = text.into();
		self.generation = self.generation.wrapping_add(1);
		self.source_len = text.chars().count();
		self.visible_len = 0;
		self.next_tick = (self.source_len > 0).then(|| now + self.interval);
		self.source = Some(text);
		self.generation
	}

	/// Return to the idle state, invalidating any outstanding ticks.
	pub fn clear(&mut self) {
		self.generation = self.generation.wrapping_add(1);
		self.source = None;
		self.source_len = 0;
		self.visible_len = 0;
		self.next_tick = None;
	}

	/// Apply a single tick scheduled under `generation`.
	///
	/// Returns `false` and leaves the state untouched when the tick is stale or
	/// there is nothing left to reveal.
	pub fn apply_tick(&mut self, generation: u64) -> bool {
		if generation != self.generation || self.phase() != RevealPhase::Revealing {
			return false;
		}
		self.visible_len += 1;
		true
	}

	/// Fire every tick that has come due by `now` and return how many applied.
	///
	/// Deadlines are chained from the previous deadline rather than from `now`,
	/// so a late frame catches up without changing the number of ticks.
	pub fn advance(&mut self, now: Instant) -> usize {
		let mut applied = 0;
		while let Some(due) = self.next_tick {
			if due > now {
				break;
			}
			if !self.apply_tick(self.generation) {
				self.next_tick = None;
				break;
			}
			applied += 1;
			self.next_tick = match self.phase() {
				RevealPhase::Revealing => Some(due + self.interval),
				_ => None,
			};
		}
		applied
	}

	#[must_use]
	pub fn phase(&self) -> RevealPhase {
		match &self.source {
			None => RevealPhase::Idle,
			Some(_) if self.visible_len < self.source_len => RevealPhase::Revealing,
			Some(_) => RevealPhase::Complete,
		}
	}

	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	#[must_use]
	pub fn next_tick(&self) -> Option<Instant> {
		self.next_tick
	}

	#[must_use]
	pub fn source(&self) -> Option<&str> {
		self.source.as_deref()
	}

	/// Length of the payload in `char`s.
	#[must_use]
	pub fn source_len(&self) -> usize {
		self.source_len
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible_len
	}

	/// The currently revealed prefix of the payload.
	#[must_use]
	pub fn visible_text(&self) -> &str {
		let Some(source) = self.source.as_deref() else {
			return "";
		};
		let end = source
			.char_indices()
			.nth(self.visible_len)
			.map_or(source.len(), |(index, _)| index);
		&source[..end]
	}
}
