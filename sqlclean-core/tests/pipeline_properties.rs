//! Property-based tests for the cleaning and highlighting pipeline
//!
//! Inputs are drawn from small alphabets rich in the characters the cleaners
//! and tokenizer care about (quotes, dashes, slashes, stars, line breaks), so
//! odd adjacencies like `-/**/-` come up often.

use logos::Logos;
use proptest::prelude::*;
use sqlclean_core::sql::cleaning::string_aware::SqlPiece;
use sqlclean_core::sql::highlight::{highlight, validate_spans};
use sqlclean_core::{collapse, process, strip, strip_string_aware, CleanOptions};

/// SQL-ish text with comment markers, quotes and line breaks
fn sqlish() -> impl Strategy<Value = String> {
    "[a-zA-Z_ '\"/*\\-\n\r\t]{0,60}"
}

/// Words and blank-ish lines, `\n` breaks only
fn lines_text() -> impl Strategy<Value = String> {
    "[ab \t\n]{0,40}"
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.trim().is_empty()).collect()
}

proptest! {
    #[test]
    fn strip_is_idempotent(text in sqlish()) {
        let once = strip(&text);
        prop_assert_eq!(strip(&once), once);
    }

    #[test]
    fn string_aware_strip_is_idempotent(text in sqlish()) {
        let once = strip_string_aware(&text);
        prop_assert_eq!(strip_string_aware(&once), once);
    }

    #[test]
    fn stripped_text_has_no_comment_markers(text in "[a-z /*\\-\n]{0,60}") {
        let stripped = strip(&text);
        prop_assert!(!stripped.contains("/*"), "left an opener in {:?}", stripped);
        prop_assert!(!stripped.contains("--"), "left a line marker in {:?}", stripped);
    }

    #[test]
    fn string_aware_strip_leaves_no_markers_outside_quotes(text in "[a-z /*\\-\n]{0,60}") {
        let stripped = strip_string_aware(&text);
        prop_assert!(!stripped.contains("/*"), "left an opener in {:?}", stripped);
        prop_assert!(!stripped.contains("--"), "left a line marker in {:?}", stripped);
    }

    #[test]
    fn string_aware_lexer_accepts_any_text(text in sqlish()) {
        prop_assert!(SqlPiece::lexer(&text).all(|piece| piece.is_ok()), "lexer error in {:?}", text);
    }

    #[test]
    fn collapse_is_idempotent(text in sqlish()) {
        let once = collapse(&text);
        prop_assert_eq!(collapse(&once), once);
    }

    #[test]
    fn collapse_never_leaves_three_breaks(text in lines_text()) {
        let collapsed = collapse(&text);
        prop_assert!(!collapsed.contains("\n\n\n"));
    }

    #[test]
    fn collapse_keeps_every_content_line(text in lines_text()) {
        let collapsed = collapse(&text);
        prop_assert_eq!(non_blank_lines(&collapsed), non_blank_lines(&text));
    }

    #[test]
    fn spans_cover_every_line(text in sqlish()) {
        for line in highlight(&text) {
            prop_assert!(validate_spans(line.text, &line.spans), "bad spans for {:?}", line.text);
            let rebuilt: String = line.segments().map(|(_, t)| t).collect();
            prop_assert_eq!(rebuilt, line.text);
        }
    }

    #[test]
    fn one_rendered_line_per_cleaned_line(text in sqlish()) {
        let output = process(&text, &CleanOptions::default());
        prop_assert_eq!(
            output.rendered_lines.len(),
            output.cleaned_text.split('\n').count()
        );
    }

    #[test]
    fn keep_all_leaves_text_untouched(text in sqlish()) {
        let output = process(&text, &CleanOptions::keep_all());
        prop_assert_eq!(output.cleaned_text, text);
    }
}
