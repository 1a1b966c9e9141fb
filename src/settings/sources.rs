use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use lookahead::app_dirs;

/// Names looked up in the working directory, in increasing precedence.
const LOCAL_FILE_NAMES: [&str; 2] = [".lookahead.toml", "lookahead.toml"];

/// Layer optional default files, then every `--config` file, then
/// `LOOKAHEAD__SECTION__KEY` variables. Later layers win.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.as_path()).required(true));

	let builder = optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(
			Environment::with_prefix("lookahead")
				.separator("__")
				.try_parsing(true),
		);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("settings were already finalised"),
		other => other.into(),
	})
}

fn local_config_files(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
	LOCAL_FILE_NAMES.iter().map(move |name| dir.join(name))
}

/// `config.toml` in the config dir, then the working-directory files.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir().ok();

	user.into_iter()
		.chain(local.iter().flat_map(|dir| local_config_files(dir)))
		.collect()
}
