//! Release preparation.
//!
//! A [`ReleasePlan`] reads and rewrites every document in memory before
//! anything touches the disk, so a missing or unreadable file aborts the
//! release with all documents untouched. Writes then happen one document
//! at a time; a failed write is not rolled back.

use std::path::{Path, PathBuf};

use prepare_release_config::Config;
use tracing::{debug, info, warn};

use crate::changelog::rewrite_changelog;
use crate::files::{read_document, write_document};
use crate::manifest::{DependencyPin, rewrite_root_manifest};
use crate::{Clock, ReleaseResult, Rewrite};

/// The documents touched by a release, in the order they are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The changelog with its `Unreleased` heading.
    Changelog,
    /// The manifest declaring the package version.
    RootManifest,
    /// The manifest pinning the internal dependency.
    DependentManifest,
}

impl DocumentKind {
    /// Describes what the rewrite looks for in this kind of document.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Changelog => "`## [Unreleased](...)` heading",
            Self::RootManifest => "`version = \"...\"` field",
            Self::DependentManifest => "exact-pin `version = \"=...\"` requirement",
        }
    }
}

/// One document and its pending rewrite.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
    kind: DocumentKind,
    relative: PathBuf,
    path: PathBuf,
    rewrite: Rewrite,
}

impl DocumentUpdate {
    /// Returns the document kind.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Returns the path as configured, relative to the release root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Returns the path the document is read from and written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the pending rewrite.
    #[must_use]
    pub fn rewrite(&self) -> &Rewrite {
        &self.rewrite
    }

    /// Writes the rewritten content back, if there is any.
    ///
    /// Returns `true` if the file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self) -> ReleaseResult<bool> {
        let Some(content) = self.rewrite.content() else {
            return Ok(false);
        };

        write_document(&self.path, content)?;
        info!(path = %self.relative.display(), "updated document");
        Ok(true)
    }
}

/// Every document rewrite needed to release one version.
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    version: String,
    updates: Vec<DocumentUpdate>,
}

impl ReleasePlan {
    /// Reads the changelog and both manifests below `root` and computes
    /// their rewrites for `version`. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if any document cannot be read, or if the
    /// dependency name produces an invalid pattern.
    pub fn prepare(
        root: &Path,
        config: &Config,
        version: &str,
        clock: &dyn Clock,
    ) -> ReleaseResult<Self> {
        info!(%version, root = %root.display(), "preparing release");

        let pin = DependencyPin::new(config.manifest.dependency.as_str())?;
        let date = clock.today();
        debug!(%date, dependency = pin.name(), "release parameters");

        let updates = vec![
            Self::load(root, &config.changelog.path, DocumentKind::Changelog, |content| {
                rewrite_changelog(content, &config.project.repository, version, date)
            })?,
            Self::load(root, &config.manifest.root, DocumentKind::RootManifest, |content| {
                rewrite_root_manifest(content, version)
            })?,
            Self::load(
                root,
                &config.manifest.dependent,
                DocumentKind::DependentManifest,
                |content| pin.rewrite(content, version),
            )?,
        ];

        Ok(Self {
            version: version.to_string(),
            updates,
        })
    }

    fn load(
        root: &Path,
        relative: &Path,
        kind: DocumentKind,
        rewrite: impl FnOnce(&str) -> Rewrite,
    ) -> ReleaseResult<DocumentUpdate> {
        let path = root.join(relative);
        let content = read_document(&path)?;
        let rewrite = rewrite(&content);

        if rewrite.is_missing() {
            warn!(
                path = %relative.display(),
                pattern = kind.pattern(),
                "pattern not found, document left unchanged"
            );
        }

        Ok(DocumentUpdate {
            kind,
            relative: relative.to_path_buf(),
            path,
            rewrite,
        })
    }

    /// Returns the version being released.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the updates in application order.
    #[must_use]
    pub fn updates(&self) -> &[DocumentUpdate] {
        &self.updates
    }

    /// Returns the documents whose pattern was not found.
    pub fn missing(&self) -> impl Iterator<Item = &DocumentUpdate> {
        self.updates.iter().filter(|update| update.rewrite.is_missing())
    }

    /// Writes every changed document, calling `before_each` ahead of each
    /// document in order, whether or not it changed.
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns the first write error. Documents written before it keep
    /// their new content.
    pub fn apply_with(
        &self,
        mut before_each: impl FnMut(&DocumentUpdate),
    ) -> ReleaseResult<usize> {
        let mut written = 0;
        for update in &self.updates {
            before_each(update);
            if update.write()? {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Writes every changed document.
    ///
    /// # Errors
    ///
    /// See [`ReleasePlan::apply_with`].
    pub fn apply(&self) -> ReleaseResult<usize> {
        self.apply_with(|_| {})
    }
}
