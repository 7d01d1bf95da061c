//! Standard transform definitions
//!
//! Pre-built cleaning transforms for the common cases, defined as static
//! references using `once_cell::sync::Lazy`.

use super::stages::{CollapseBlankLines, StripComments, StripCommentsStringAware};
use super::Transform;
use once_cell::sync::Lazy;

/// Type alias for text-to-text cleaning transforms
pub type CleaningTransform = Transform<String, String>;

/// Strip comments only.
pub static STRIP: Lazy<CleaningTransform> =
    Lazy::new(|| Transform::identity().then(StripComments));

/// Collapse blank lines only.
pub static COLLAPSE: Lazy<CleaningTransform> =
    Lazy::new(|| Transform::identity().then(CollapseBlankLines));

/// The default cleaning path: strip comments, then collapse blank lines.
pub static CLEAN: Lazy<CleaningTransform> = Lazy::new(|| {
    Transform::identity()
        .then(StripComments)
        .then(CollapseBlankLines)
});

/// Like [`CLEAN`], with quoted literals protected from stripping.
pub static CLEAN_STRING_AWARE: Lazy<CleaningTransform> = Lazy::new(|| {
    Transform::identity()
        .then(StripCommentsStringAware)
        .then(CollapseBlankLines)
});
