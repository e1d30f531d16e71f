//! CLI definition.

use anyhow::Result;
use clap::Parser;

use crate::prepare;

/// Printed when the positional arguments are wrong.
pub const USAGE: &str = "Usage: prepare-release <version>";

/// Update the changelog and manifests for a new selene release.
#[derive(Debug, Parser)]
#[command(name = "prepare-release")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Version to release, used verbatim
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub release_version: String,

    /// Show what would change without writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip the build check after updating the files
    #[arg(long)]
    pub no_check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the release preparation.
    pub fn run(self) -> Result<()> {
        prepare::run(&self)
    }
}
