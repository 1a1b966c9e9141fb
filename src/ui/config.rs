use std::time::Duration;

const DEFAULT_INTRO: &str = "Type a keyword and the lookup service retrieves the most relevant \
	policy as you type. Try \"vacation policy\", \"sick leave\" or \"remote work\".";

/// Text used by the UI when rendering the header, prompt and result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub intro: String,
	pub prompt: String,
	pub placeholder: String,
	pub empty_message: String,
	pub loading_label: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Smart Policy Search".to_string(),
			intro: DEFAULT_INTRO.to_string(),
			prompt: "Search".to_string(),
			placeholder: "Search policies...".to_string(),
			empty_message: "No policies found".to_string(),
			loading_label: "Searching".to_string(),
		}
	}
}

/// Timing knobs for the input-to-render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
	/// Quiet period the query must stay unchanged before a lookup is sent.
	pub debounce: Duration,
	/// Delay between two revealed characters.
	pub tick: Duration,
	/// Queries with fewer characters clear the result instead of searching.
	pub min_chars: usize,
}

impl TimingConfig {
	pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
	pub const DEFAULT_TICK: Duration = Duration::from_millis(50);
	pub const DEFAULT_MIN_CHARS: usize = 3;
}

impl Default for TimingConfig {
	fn default() -> Self {
		Self {
			debounce: Self::DEFAULT_DEBOUNCE,
			tick: Self::DEFAULT_TICK,
			min_chars: Self::DEFAULT_MIN_CHARS,
		}
	}
}
