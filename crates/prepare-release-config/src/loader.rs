//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "prepare-release.toml";

/// Loads and validates configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Loads configuration from `dir`, falling back to defaults when the
/// directory holds no configuration file.
///
/// Unlike a lookup that walks parent directories, only `dir` itself is
/// consulted: every path in the configuration is relative to it.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be read,
/// parsed or validated.
pub fn load_config_or_default(dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

    if config_path.exists() {
        load_config(config_path)
    } else {
        debug!(?config_path, "no configuration file, using defaults");
        Ok(Config::default())
    }
}
