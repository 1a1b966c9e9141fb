use serde::{Deserialize, Serialize};

/// The single record returned by the lookup service for a term.
///
/// Serializes to the service's wire shape, `{"policy": .., "description": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecord {
	#[serde(rename = "policy")]
	pub title: String,
	pub description: String,
}

impl LookupRecord {
	#[must_use]
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
		}
	}
}
