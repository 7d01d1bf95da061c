//! Blank line collapsing
//!
//! A blank line is one holding nothing but whitespace. Any run of line breaks
//! separated only by whitespace, i.e. one or more blank lines between two
//! content lines, becomes exactly one blank line.
//!
//! # Logic
//!
//! 1. Find a line break followed by whitespace and another line break
//! 2. Extend the match greedily over every further blank line
//! 3. Replace the whole run with two line breaks, in the style (`\n` or
//!    `\r\n`) of the first break of the run
//!
//! Text before the first break and after the last one is left alone, so
//! trailing spaces on a content line and indentation on the next content line
//! both survive.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\r?\n)\s*\n").expect("blank run regex is valid"));

/// Collapse every run of blank lines in `text` to a single blank line.
pub fn collapse(text: &str) -> String {
    let result = BLANK_RUN
        .replace_all(text, |caps: &Captures<'_>| {
            if &caps[1] == "\r\n" {
                "\r\n\r\n"
            } else {
                "\n\n"
            }
        })
        .into_owned();

    tracing::trace!(
        input_len = text.len(),
        output_len = result.len(),
        "collapsed blank lines"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_newline_unchanged() {
        assert_eq!(collapse("a\nb"), "a\nb");
    }

    #[test]
    fn test_single_blank_line_unchanged() {
        assert_eq!(collapse("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_many_blank_lines_become_one() {
        assert_eq!(collapse("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        assert_eq!(collapse("a\n   \n\t\n  \nb"), "a\n\nb");
    }

    #[test]
    fn test_keeps_indentation_of_next_line() {
        assert_eq!(collapse("a\n \n\n    b"), "a\n\n    b");
    }

    #[test]
    fn test_keeps_trailing_spaces_of_content_line() {
        assert_eq!(collapse("a  \n\n\nb"), "a  \n\nb");
    }

    #[test]
    fn test_leading_and_trailing_runs() {
        assert_eq!(collapse("\n\n\na\n\n\n"), "\n\na\n\n");
    }

    #[test]
    fn test_crlf_runs() {
        assert_eq!(collapse("a\r\n\r\n\r\n\r\nb"), "a\r\n\r\nb");
        assert_eq!(collapse("a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(collapse(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = collapse("x\n\n \n\ny\r\n\r\n\r\nz");
        assert_eq!(collapse(&once), once);
    }
}
