//! Table-driven cases for the cleaners and the HTML rendering path

use rstest::rstest;
use sqlclean_core::{collapse, process, strip, strip_string_aware, tokenize, CleanOptions};

#[rstest]
#[case::keyword_suffix("AFIN", "AFIN")]
#[case::keywords_around_word(
    "A IN B",
    r#"A <span class="sql-keyword">IN</span> B"#
)]
#[case::lowercase_keyword("select 1", r#"<span class="sql-keyword">select</span> 1"#)]
#[case::dashes_in_literal(
    "'--not a comment'",
    r#"<span class="sql-string">'--not a comment'</span>"#
)]
#[case::comment_after_code(
    "x -- note",
    r#"x <span class="sql-comment">-- note</span>"#
)]
#[case::escaped_markup("a<b & c>d", "a&lt;b &amp; c&gt;d")]
#[case::escaped_inside_span(
    "'<b>'",
    r#"<span class="sql-string">'&lt;b&gt;'</span>"#
)]
fn renders_single_line(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tokenize(input), vec![expected.to_string()]);
}

#[rstest]
#[case::trailing_line_comment("SELECT 1 -- one\nFROM t", "SELECT 1 \nFROM t")]
#[case::multi_line_block("a /* x\ny */ b", "a  b")]
#[case::two_blocks_non_greedy("a /* x */ b /* y */ c", "a  b  c")]
#[case::unterminated_block("SELECT 1 /* open", "SELECT 1 ")]
#[case::rejoined_line_marker("-/**/- tail\nnext", "\nnext")]
#[case::dashes_inside_literal("SELECT '--x' FROM t", "SELECT '")]
fn strips_comments(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(strip(input), expected);
}

#[rstest]
#[case::dashes_inside_literal("SELECT '--x' FROM t", "SELECT '--x' FROM t")]
#[case::block_inside_identifier("\"/* c */\" -- d", "\"/* c */\" ")]
#[case::escaped_quote("'it''s -- fine' --gone", "'it''s -- fine' ")]
#[case::real_comment_between_literals("'a' /* x */ 'b'", "'a'  'b'")]
fn strips_comments_outside_quotes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(strip_string_aware(input), expected);
}

#[rstest]
#[case::three_breaks("a\n\n\nb", "a\n\nb")]
#[case::whitespace_only_lines("a\n  \n\t\nb", "a\n\nb")]
#[case::single_break_untouched("a\nb", "a\nb")]
#[case::crlf_run("a\r\n\r\n\r\nb", "a\r\n\r\nb")]
fn collapses_blank_runs(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(collapse(input), expected);
}

#[test]
fn cleans_and_highlights_query() {
    let output = process(
        "SELECT * FROM t -- comment\n\n\nWHERE x=1",
        &CleanOptions::default(),
    );

    assert_eq!(output.cleaned_text, "SELECT * FROM t \n\nWHERE x=1");
    assert_eq!(
        output.rendered_lines,
        vec![
            r#"<span class="sql-keyword">SELECT</span> * <span class="sql-keyword">FROM</span> t "#
                .to_string(),
            String::new(),
            r#"<span class="sql-keyword">WHERE</span> x=1"#.to_string(),
        ]
    );
}

#[test]
fn empty_input_gives_one_empty_line() {
    let output = process("", &CleanOptions::default());
    assert_eq!(output.cleaned_text, "");
    assert_eq!(output.rendered_lines, vec![String::new()]);
}

#[test]
fn comments_only_input_cleans_to_nothing() {
    let output = process("-- a\n/* b */", &CleanOptions::default());
    assert_eq!(output.cleaned_text, "\n");
    assert_eq!(output.rendered_lines, vec![String::new(), String::new()]);
}

#[test]
fn disabled_cleaners_keep_comments_highlighted() {
    let options = CleanOptions {
        remove_comments: false,
        ..CleanOptions::default()
    };
    let output = process("a -- b\n\n\nc", &options);
    assert_eq!(output.cleaned_text, "a -- b\n\nc");
    assert_eq!(
        output.rendered_lines[0],
        r#"a <span class="sql-comment">-- b</span>"#
    );
}
