use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) endpoint: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) debounce: Option<SettingSource>,
	pub(crate) tick: Option<SettingSource>,
	pub(crate) min_chars: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	/// Source recorded for a setting, or its config key when it was never set.
	pub(crate) fn source_or_key(
		source: &Option<SettingSource>,
		key: &'static str,
	) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
