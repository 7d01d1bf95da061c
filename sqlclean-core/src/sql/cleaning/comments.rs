//! Comment stripping
//!
//! Removes `/* ... */` block comments and `--` line comments from SQL text.
//!
//! The stripper is purely lexical: it has no notion of string literals, so a
//! `--` or `/*` inside a quoted literal is treated as a comment marker. Callers
//! that need literals protected should use [`strip_string_aware`] instead.
//!
//! Block comments are removed first, shortest match: the first `*/` after a
//! `/*` closes it, and a `/*` with no closing `*/` swallows the rest of the
//! input. Line comments are removed next, up to but not including the line
//! terminator.
//!
//! [`strip_string_aware`]: super::string_aware::strip_string_aware

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?(?:\*/|\z)").expect("block comment regex is valid"));

static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--[^\r\n]*").expect("line comment regex is valid"));

/// Remove all block and line comments from `text`.
///
/// Characters outside removed comments are never altered. The result is a
/// fixed point: `strip(&strip(x)) == strip(x)` for every input.
pub fn strip(text: &str) -> String {
    let without_blocks = strip_block_comments(text);
    let result = LINE_COMMENT.replace_all(&without_blocks, "").into_owned();

    tracing::trace!(
        input_len = text.len(),
        output_len = result.len(),
        "stripped comments"
    );
    result
}

/// Remove block comments only, leaving `--` comments in place.
///
/// Removing a comment can splice its neighbours into a fresh `/*` (as in
/// `//**/*x*/`), so removal repeats until no opener is left. Every pass that
/// matches shortens the text.
pub fn strip_block_comments(text: &str) -> String {
    let mut current = BLOCK_COMMENT.replace_all(text, "").into_owned();
    while BLOCK_COMMENT.is_match(&current) {
        current = BLOCK_COMMENT.replace_all(&current, "").into_owned();
    }
    current
}

/// Remove `--` line comments only, leaving block comments in place.
pub fn strip_line_comments(text: &str) -> String {
    LINE_COMMENT.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_line_comment_keeps_newline() {
        assert_eq!(strip("SELECT 1 -- one\nFROM t"), "SELECT 1 \nFROM t");
    }

    #[test]
    fn test_line_comment_keeps_crlf() {
        assert_eq!(strip("a -- x\r\nb"), "a \r\nb");
    }

    #[test]
    fn test_removes_block_comment_across_lines() {
        assert_eq!(strip("SELECT /* a\nb\nc */ 1"), "SELECT  1");
    }

    #[test]
    fn test_block_comment_is_non_greedy() {
        assert_eq!(strip("a /* x */ b /* y */ c"), "a  b  c");
    }

    #[test]
    fn test_unterminated_block_consumes_to_end() {
        assert_eq!(strip("SELECT 1 /* open\nSELECT 2"), "SELECT 1 ");
    }

    #[test]
    fn test_line_marker_inside_block_is_irrelevant() {
        assert_eq!(strip("a /* -- */ b"), "a  b");
    }

    #[test]
    fn test_block_inside_line_comment_is_removed_first() {
        // The block comment goes first and eats the newline, so the line
        // comment then runs to the end of the input.
        assert_eq!(strip("a -- /* x\n */ b"), "a ");
    }

    #[test]
    fn test_not_string_aware() {
        assert_eq!(strip("SELECT '--x' FROM t"), "SELECT '");
    }

    #[test]
    fn test_spliced_opener_is_removed() {
        assert_eq!(strip("//**/*x*/"), "");
        assert_eq!(strip("-/**/- tail\nnext"), "\nnext");
    }

    #[test]
    fn test_idempotent_on_spliced_input() {
        let once = strip("a//**/*b*/c -/**/-d\ne");
        assert_eq!(strip(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip(""), "");
    }

    #[test]
    fn test_partial_strippers() {
        let sql = "a /* b */ c -- d";
        assert_eq!(strip_block_comments(sql), "a  c -- d");
        assert_eq!(strip_line_comments(sql), "a /* b */ c ");
    }
}
