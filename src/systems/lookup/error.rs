use thiserror::Error;

/// Ways a single lookup can fail. None of them are fatal to the widget.
#[derive(Debug, Error)]
pub enum LookupError {
	#[error("invalid lookup endpoint '{endpoint}': {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request for '{term}' failed: {source}")]
	Transport {
		term: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("lookup service answered '{term}' with status {status}")]
	Status {
		term: String,
		status: reqwest::StatusCode,
	},
	#[error("malformed response for '{term}': {source}")]
	Decode {
		term: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to start lookup thread: {0}")]
	Spawn(#[source] std::io::Error),
	#[error("lookup worker is no longer running")]
	WorkerGone,
}
