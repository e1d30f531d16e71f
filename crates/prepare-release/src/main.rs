//! prepare-release - Update the changelog and manifests for a new release.

use std::process;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod cli;
mod prepare;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    // Logs go to stderr so stdout only carries progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{}", err.render());
            println!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    init_logging(cli.verbose);
    cli.run()
}
