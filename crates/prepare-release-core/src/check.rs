//! Advisory build check run after the documents are rewritten.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

/// Outcome of running the build check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The command exited successfully.
    Passed,
    /// The command exited unsuccessfully. The code is `None` when the
    /// process was terminated by a signal.
    Failed(Option<i32>),
    /// The command could not be started.
    NotRun(String),
}

impl CheckOutcome {
    /// Returns `true` if the check passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// External command verifying that the project still builds.
///
/// Standard streams are inherited, so the command's output reaches the
/// operator directly. The outcome never fails the release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCheck {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl BuildCheck {
    /// Creates a check running `program` without arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Builds a check from a program followed by its arguments.
    ///
    /// Returns `None` for an empty command.
    #[must_use]
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone()).with_args(args.iter().cloned()))
    }

    /// Appends arguments.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Runs the command from `dir` instead of the current directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Runs the command to completion.
    pub fn run(&self) -> CheckOutcome {
        debug!(command = %self, "running build check");

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        match command.status() {
            Ok(status) if status.success() => CheckOutcome::Passed,
            Ok(status) => {
                warn!(command = %self, code = ?status.code(), "build check failed");
                CheckOutcome::Failed(status.code())
            }
            Err(e) => {
                warn!(command = %self, error = %e, "build check could not start");
                CheckOutcome::NotRun(e.to_string())
            }
        }
    }
}

impl Default for BuildCheck {
    fn default() -> Self {
        Self::new("cargo").with_args(["check"])
    }
}

impl fmt::Display for BuildCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
