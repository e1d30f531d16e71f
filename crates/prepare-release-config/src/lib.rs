//! Configuration management for prepare-release.
//!
//! This crate handles loading and validating the optional
//! `prepare-release.toml` file. Without one, every value falls back to the
//! selene repository layout.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, load_config, load_config_or_default};
pub use schema::{ChangelogConfig, CheckConfig, Config, ManifestConfig, ProjectConfig};
