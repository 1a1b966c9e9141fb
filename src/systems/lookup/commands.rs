use super::error::LookupError;
use super::record::LookupRecord;

/// Commands understood by the background lookup worker.
#[derive(Debug)]
pub(crate) enum LookupCommand {
	/// Resolve `term` against the lookup service.
	Fetch {
		/// Identifier that lets the UI correlate the response with the request.
		id: u64,
		term: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Settlement of a single [`LookupCommand::Fetch`].
#[derive(Debug)]
pub(crate) struct LookupResponse {
	pub id: u64,
	pub term: String,
	pub outcome: Result<LookupRecord, LookupError>,
}
