//! Where `lookahead` keeps its `config.toml` and its log file.
//!
//! `LOOKAHEAD_CONFIG_DIR` and `LOOKAHEAD_DATA_DIR` take precedence over the
//! per-user locations from `directories`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

pub const CONFIG_DIR_ENV: &str = "LOOKAHEAD_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "LOOKAHEAD_DATA_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
	Config,
	Data,
}

impl AppDir {
	fn override_var(self) -> &'static str {
		match self {
			Self::Config => CONFIG_DIR_ENV,
			Self::Data => DATA_DIR_ENV,
		}
	}

	fn platform_path(self, dirs: &ProjectDirs) -> PathBuf {
		match self {
			Self::Config => dirs.config_local_dir().to_path_buf(),
			Self::Data => dirs.data_local_dir().to_path_buf(),
		}
	}

	fn resolve(self, lookup: impl Fn(&str) -> Option<OsString>) -> Result<PathBuf> {
		match lookup(self.override_var()) {
			Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
			_ => {
				let dirs = ProjectDirs::from("io", "lookahead", "lookahead")
					.ok_or_else(|| anyhow!("no home directory to place lookahead files in"))?;
				Ok(self.platform_path(&dirs))
			}
		}
	}
}

/// Directory holding the user's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve(|name| env::var_os(name))
}

pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve(|name| env::var_os(name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn override_variable_wins() {
		let dir = AppDir::Data
			.resolve(|name| (name == DATA_DIR_ENV).then(|| OsString::from("/tmp/lookahead-logs")))
			.expect("override resolves");
		assert_eq!(dir, PathBuf::from("/tmp/lookahead-logs"));
	}

	#[test]
	fn blank_override_is_ignored() {
		let lookup = |_: &str| Some(OsString::new());
		if let Ok(dir) = AppDir::Config.resolve(lookup) {
			assert_ne!(dir, PathBuf::new());
		}
	}

	#[test]
	fn each_directory_has_its_own_variable() {
		assert_eq!(AppDir::Config.override_var(), "LOOKAHEAD_CONFIG_DIR");
		assert_eq!(AppDir::Data.override_var(), "LOOKAHEAD_DATA_DIR");
	}
}
