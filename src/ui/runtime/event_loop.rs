use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::ui::{App, SearchOutcome};

/// Run `app` in the terminal until the user accepts or cancels.
pub fn run(mut app: App<'_>) -> Result<SearchOutcome> {
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with an outcome.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		// An initial query counts as an edit so it goes through the same gate.
		if !self.query().is_empty() {
			self.input_changed(Instant::now());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key, Instant::now())
				{
					maybe_outcome = Some(outcome);
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			self.tick(Instant::now());
			if self.is_loading() {
				self.throbber_state.calc_next();
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
