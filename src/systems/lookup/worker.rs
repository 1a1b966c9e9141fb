use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::client::LookupClient;
use super::commands::{LookupCommand, LookupResponse};
use super::error::LookupError;

/// Launches the background lookup worker and returns its channels.
///
/// Each fetch runs on its own short-lived thread so a slow response never
/// holds back a newer request. Responses may therefore arrive out of order;
/// the receiving side is responsible for discarding stale ones.
pub(crate) fn spawn(client: Arc<dyn LookupClient>) -> (Sender<LookupCommand>, Receiver<LookupResponse>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(&client, command_rx, response_tx));

	(command_tx, response_rx)
}

fn worker_loop(
	client: &Arc<dyn LookupClient>,
	command_rx: Receiver<LookupCommand>,
	response_tx: Sender<LookupResponse>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, &response_tx, command) {
			break;
		}
	}
	tracing::debug!("lookup worker stopped");
}

fn handle_command(
	client: &Arc<dyn LookupClient>,
	response_tx: &Sender<LookupResponse>,
	command: LookupCommand,
) -> bool {
	match command {
		LookupCommand::Fetch { id, term } => {
			let client = Arc::clone(client);
			let tx = response_tx.clone();
			let thread_term = term.clone();
			let spawned = thread::Builder::new()
				.name(format!("lookup-{id}"))
				.spawn(move || {
					let outcome = client.lookup(&thread_term);
					let _ = tx.send(LookupResponse {
						id,
						term: thread_term,
						outcome,
					});
				});
			if let Err(err) = spawned {
				let _ = response_tx.send(LookupResponse {
					id,
					term,
					outcome: Err(LookupError::Spawn(err)),
				});
			}
			true
		}
		LookupCommand::Shutdown => false,
	}
}
