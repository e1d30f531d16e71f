//! Manifest version rewrites.
//!
//! Both rewrites edit the text in place rather than round-tripping the
//! TOML, so comments, ordering and formatting survive untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::ReleaseResult;
use crate::rewrite::{Rewrite, splice};

/// Matches a `version = "..."` key. The key must stand on its own, so
/// `rust-version` and similar keys are skipped.
static VERSION_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)(?:^|[\s{,])version[ \t]*=[ \t]*"(?P<value>[^"\r\n]*)""#)
        .expect("invalid regex")
});

/// Replaces the value of the first `version = "..."` field with `version`.
#[must_use]
pub fn rewrite_root_manifest(content: &str, version: &str) -> Rewrite {
    let Some(value) = VERSION_FIELD
        .captures(content)
        .and_then(|captures| captures.name("value"))
    else {
        return Rewrite::Missing;
    };

    splice(content, value.range(), version)
}

/// Exact-pin requirement of an internal dependency, such as
/// `selene-lib = { path = "../selene-lib", version = "=0.27.0" }`.
#[derive(Debug, Clone)]
pub struct DependencyPin {
    name: String,
    pattern: Regex,
}

impl DependencyPin {
    /// Creates a matcher for the dependency called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern built from `name` does not compile.
    pub fn new(name: impl Into<String>) -> ReleaseResult<Self> {
        let name = name.into();
        let pattern = Regex::new(&format!(
            r#"(?m)^{}[ \t]*=[^\r\n]*?\bversion[ \t]*=[ \t]*"(?P<pin>=[^"\r\n]*)""#,
            regex::escape(&name)
        ))?;

        Ok(Self { name, pattern })
    }

    /// Returns the dependency name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the first pinned requirement with `=version`, leaving the
    /// rest of the declaration byte-identical.
    #[must_use]
    pub fn rewrite(&self, content: &str, version: &str) -> Rewrite {
        let Some(pin) = self
            .pattern
            .captures(content)
            .and_then(|captures| captures.name("pin"))
        else {
            return Rewrite::Missing;
        };

        splice(content, pin.range(), &format!("={version}"))
    }
}
