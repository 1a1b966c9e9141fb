use serde::Serialize;

use crate::systems::lookup::LookupRecord;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// `true` when the user confirmed with Enter, `false` when they cancelled.
	pub accepted: bool,
	pub query: String,
	pub result: Option<LookupRecord>,
}
