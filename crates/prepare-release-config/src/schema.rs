//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project configuration.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Manifest configuration.
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Build check configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot drive a release.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.project.repository.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "project.repository must not be empty".to_string(),
            ));
        }

        if self.manifest.dependency.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "manifest.dependency must not be empty".to_string(),
            ));
        }

        match self.check.command.first() {
            Some(program) if !program.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::Invalid(
                "check.command must name a program".to_string(),
            )),
        }
    }
}

/// Project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Repository URL used for compare and release links.
    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
        }
    }
}

fn default_repository() -> String {
    "https://github.com/Kampfkarren/selene".to_string()
}

/// Changelog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Changelog path, relative to the invocation directory.
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: default_changelog_path(),
        }
    }
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Manifest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Manifest holding the package version.
    #[serde(default = "default_root_manifest")]
    pub root: PathBuf,

    /// Manifest pinning the internal dependency.
    #[serde(default = "default_dependent_manifest")]
    pub dependent: PathBuf,

    /// Name of the pinned internal dependency.
    #[serde(default = "default_dependency")]
    pub dependency: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: default_root_manifest(),
            dependent: default_dependent_manifest(),
            dependency: default_dependency(),
        }
    }
}

fn default_root_manifest() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

fn default_dependent_manifest() -> PathBuf {
    PathBuf::from("selene/Cargo.toml")
}

fn default_dependency() -> String {
    "selene-lib".to_string()
}

/// Build check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Program followed by its arguments.
    #[serde(default = "default_check_command")]
    pub command: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            command: default_check_command(),
        }
    }
}

fn default_check_command() -> Vec<String> {
    vec!["cargo".to_string(), "check".to_string()]
}
