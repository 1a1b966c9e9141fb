use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/qahandbook";
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// `[lookup]` section as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LookupSection {
	pub(super) endpoint: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl LookupSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.endpoint = Some(endpoint);
		}
		if let Some(secs) = cli.timeout_secs {
			self.timeout_secs = Some(secs);
		}
	}

	pub(super) fn resolve(self) -> (String, Duration) {
		let endpoint = self
			.endpoint
			.map(|endpoint| endpoint.trim().to_string())
			.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
		let timeout = Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
		(endpoint, timeout)
	}
}
