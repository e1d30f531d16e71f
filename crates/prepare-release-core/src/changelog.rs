//! Changelog heading rewrite.
//!
//! The changelog keeps pending notes under a heading of the form
//! `## [Unreleased](<compare url>)`. Cutting a release splits that heading
//! in two: a fresh `Unreleased` heading comparing the new tag against
//! `HEAD`, followed by a dated heading for the release itself.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::rewrite::{Rewrite, splice};

/// Matches the `Unreleased` heading, one line at a time.
static UNRELEASED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^## \[Unreleased\]\((?P<url>.+)\)$").expect("invalid regex")
});

/// Builds the links written into release headings.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseLinks<'a> {
    repository: &'a str,
}

impl<'a> ReleaseLinks<'a> {
    /// Creates links rooted at `repository`. A trailing `/` is ignored.
    #[must_use]
    pub fn new(repository: &'a str) -> Self {
        Self {
            repository: repository.trim_end_matches('/'),
        }
    }

    /// URL comparing `version` against the head of development.
    #[must_use]
    pub fn compare(&self, version: &str) -> String {
        format!("{}/compare/{version}...HEAD", self.repository)
    }

    /// URL of the release page for `version`.
    #[must_use]
    pub fn release(&self, version: &str) -> String {
        format!("{}/releases/tag/{version}", self.repository)
    }
}

/// Splits the first `Unreleased` heading into a new `Unreleased` heading
/// and a release heading for `version` dated `date`.
///
/// Returns [`Rewrite::Current`] when the `Unreleased` heading already
/// compares against `version`, so running twice never adds a second
/// release heading.
#[must_use]
pub fn rewrite_changelog(
    content: &str,
    repository: &str,
    version: &str,
    date: NaiveDate,
) -> Rewrite {
    let Some(captures) = UNRELEASED_HEADING.captures(content) else {
        return Rewrite::Missing;
    };

    let links = ReleaseLinks::new(repository);
    let compare = links.compare(version);

    if &captures["url"] == compare {
        return Rewrite::Current;
    }

    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let headings = format!(
        "## [Unreleased]({compare}){newline}{newline}## [{version}]({release}) - {date}",
        release = links.release(version),
        date = date.format("%Y-%m-%d"),
    );

    splice(content, captures.get_match().range(), &headings)
}
