//! Core library for prepare-release.
//!
//! This crate rewrites the changelog and manifests for a new version and
//! runs the advisory build check afterwards.

mod changelog;
mod check;
mod clock;
mod error;
mod files;
mod manifest;
mod release;
mod rewrite;

pub use changelog::{ReleaseLinks, rewrite_changelog};
pub use check::{BuildCheck, CheckOutcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ReleaseError, ReleaseResult};
pub use files::{read_document, write_document};
pub use manifest::{DependencyPin, rewrite_root_manifest};
pub use release::{DocumentKind, DocumentUpdate, ReleasePlan};
pub use rewrite::Rewrite;
