//! Outcome of a single text substitution.

use std::ops::Range;

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The pattern matched and the content changed.
    Updated(String),
    /// The pattern matched but the document already carries the new version.
    Current,
    /// The pattern did not match; the document is left as is.
    Missing,
}

impl Rewrite {
    /// Returns the new content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Updated(content) => Some(content),
            Self::Current | Self::Missing => None,
        }
    }

    /// Returns `true` if the document needs to be written back.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// Returns `true` if the expected pattern was not found.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Replaces `range` of `content` with `replacement`.
///
/// The replacement is inserted literally, so `$` sequences in a version
/// token are never expanded as capture references.
pub(crate) fn splice(content: &str, range: Range<usize>, replacement: &str) -> Rewrite {
    if &content[range.clone()] == replacement {
        return Rewrite::Current;
    }

    let mut output = String::with_capacity(content.len() + replacement.len());
    output.push_str(&content[..range.start]);
    output.push_str(replacement);
    output.push_str(&content[range.end..]);
    Rewrite::Updated(output)
}
