use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;

	use super::*;

	fn cli_with_file(contents: &str, extra: &[&str]) -> (tempfile::TempDir, CliArgs) {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("lookahead.toml");
		fs::write(&path, contents).expect("write config");
		let path = path.to_string_lossy().into_owned();
		let mut args = vec!["lookahead", "--no-config", "--config", path.as_str()];
		args.extend_from_slice(extra);
		let cli = CliArgs::parse_from(args);
		(dir, cli)
	}

	#[test]
	fn file_values_are_resolved() {
		let (_dir, cli) = cli_with_file(
			r#"
[lookup]
endpoint = "https://policies.example.com/handbook"
timeout_secs = 3

[timing]
debounce_ms = 250
min_chars = 2

[ui]
title = "Handbook"
theme = "light"
"#,
			&[],
		);

		let config = load(&cli).expect("config loads");
		assert_eq!(config.endpoint, "https://policies.example.com/handbook");
		assert_eq!(config.timeout, Duration::from_secs(3));
		assert_eq!(config.timing.debounce, Duration::from_millis(250));
		assert_eq!(config.timing.tick, Duration::from_millis(50));
		assert_eq!(config.timing.min_chars, 2);
		assert_eq!(config.ui.title, "Handbook");
		assert_eq!(config.theme_name, "light");
	}

	#[test]
	fn cli_flags_override_file_values() {
		let (_dir, cli) = cli_with_file(
			"[timing]\ndebounce_ms = 250\n",
			&["--debounce-ms", "800", "--query", "sick leave"],
		);

		let config = load(&cli).expect("config loads");
		assert_eq!(config.timing.debounce, Duration::from_millis(800));
		assert_eq!(config.initial_query, "sick leave");
	}

	#[test]
	fn invalid_file_value_names_the_config_key() {
		let (_dir, cli) = cli_with_file("[timing]\ntick_ms = 0\n", &[]);

		let err = load(&cli).expect_err("zero tick is rejected");
		let message = err.to_string();
		assert!(message.contains("timing.tick_ms"), "{message}");
		assert!(message.contains("configuration key"), "{message}");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"lookahead",
			"--no-config",
			"--config",
			"/definitely/not/here/lookahead.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
