//! Cleaning stages
//!
//! Each stage wraps one cleaner from [`crate::sql::cleaning`] so it can be
//! chained into a [`Transform`](super::Transform).

use super::Runnable;
use crate::sql::cleaning::{collapse, strip, strip_string_aware};

/// Remove block and line comments, ignoring string literals.
pub struct StripComments;

impl Runnable<String, String> for StripComments {
    fn run(&self, input: String) -> String {
        strip(&input)
    }

    fn name(&self) -> &'static str {
        "strip-comments"
    }
}

/// Remove comments but keep quoted literals intact.
pub struct StripCommentsStringAware;

impl Runnable<String, String> for StripCommentsStringAware {
    fn run(&self, input: String) -> String {
        strip_string_aware(&input)
    }

    fn name(&self) -> &'static str {
        "strip-comments-string-aware"
    }
}

/// Collapse runs of blank lines to one.
pub struct CollapseBlankLines;

impl Runnable<String, String> for CollapseBlankLines {
    fn run(&self, input: String) -> String {
        collapse(&input)
    }

    fn name(&self) -> &'static str {
        "collapse-blank-lines"
    }
}
