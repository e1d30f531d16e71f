//! Release preparation command.

use std::env;

use anyhow::{Context, Result};
use tracing::{info, warn};

use prepare_release_config::load_config_or_default;
use prepare_release_core::{
    BuildCheck, CheckOutcome, DocumentKind, DocumentUpdate, ReleasePlan, Rewrite, SystemClock,
};

use crate::cli::Cli;

/// Progress line printed before a document is updated.
fn progress_line(update: &DocumentUpdate) -> String {
    let path = update.relative_path().display();
    match update.kind() {
        DocumentKind::Changelog => "Updating CHANGELOG...".to_string(),
        DocumentKind::RootManifest => format!("Updating root {path}..."),
        DocumentKind::DependentManifest => format!("Updating {path}..."),
    }
}

/// Explains a document that will not be written.
fn report_unchanged(update: &DocumentUpdate, version: &str) {
    let path = update.relative_path().display();
    match update.rewrite() {
        Rewrite::Updated(_) => {}
        Rewrite::Current => println!("  {path} already refers to {version}"),
        Rewrite::Missing => println!(
            "  warning: no {} found in {path}, left unchanged",
            update.kind().pattern()
        ),
    }
}

fn print_dry_run(plan: &ReleasePlan) {
    println!("Dry run for {}:", plan.version());
    for update in plan.updates() {
        if update.rewrite().is_updated() {
            println!("  Would update {}", update.relative_path().display());
        } else {
            report_unchanged(update, plan.version());
        }
    }
    println!("\nDry run completed. No files were changed.");
}

fn run_check(check: &BuildCheck) {
    println!("Running {check}...");

    match check.run() {
        CheckOutcome::Passed => info!(command = %check, "build check passed"),
        CheckOutcome::Failed(Some(code)) => {
            println!("  warning: `{check}` exited with status {code}");
        }
        CheckOutcome::Failed(None) => {
            println!("  warning: `{check}` was terminated by a signal");
        }
        CheckOutcome::NotRun(reason) => {
            println!("  warning: could not run `{check}`: {reason}");
        }
    }
}

/// Runs the release preparation from the current directory.
pub fn run(cli: &Cli) -> Result<()> {
    let root = env::current_dir().context("failed to resolve the current directory")?;
    let config = load_config_or_default(&root).context("failed to load configuration")?;
    let version = cli.release_version.as_str();

    let plan = ReleasePlan::prepare(&root, &config, version, &SystemClock)
        .context("failed to prepare release")?;

    if cli.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let written = plan
        .apply_with(|update| {
            println!("{}", progress_line(update));
            report_unchanged(update, version);
        })
        .context("failed to update release files")?;
    info!(written, %version, "release files updated");

    if plan.missing().next().is_some() {
        warn!("some files were left unchanged, check the warnings above");
    }

    if cli.no_check {
        println!("Skipping build check");
    } else {
        let check = BuildCheck::from_command(&config.check.command)
            .context("check.command is empty")?
            .in_dir(&root);
        run_check(&check);
    }

    println!("------");
    println!("Done. Next steps:");
    println!("- Make and push a commit with [release]");
    println!("- cargo publish");

    Ok(())
}
