//! Highlighting tokenizer
//!
//! Scans each line left to right in a single pass. At every position the
//! first rule that applies wins:
//!
//! 1. `'` opens a string literal running through the next `'`, or to the end
//!    of the line when there is none
//! 2. `"` does the same with `"`
//! 3. `--` opens a comment running to the end of the line
//! 4. a keyword matching here and ending on a word boundary, unless the
//!    previous character is alphanumeric or `_`
//! 5. otherwise one plain character
//!
//! Lines are independent: nothing carries over from one line to the next, so
//! an unterminated literal never swallows the lines after it.

use super::keywords::{is_word_char, keyword_at};
use super::span::{HighlightedLine, Span, SpanKind};

/// Classify one line into spans.
///
/// Consecutive plain characters are merged into a single span.
pub fn tokenize_line(line: &str) -> Vec<Span> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut plain_start: Option<usize> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];

        // Quoted strings
        if ch == b'\'' || ch == b'"' {
            flush_plain(&mut spans, &mut plain_start, pos);
            let end = line[pos + 1..]
                .find(ch as char)
                .map_or(line.len(), |offset| pos + 1 + offset + 1);
            spans.push(Span::new(SpanKind::String, pos..end));
            pos = end;
            continue;
        }

        // Line comment
        if line[pos..].starts_with("--") {
            flush_plain(&mut spans, &mut plain_start, pos);
            spans.push(Span::new(SpanKind::Comment, pos..line.len()));
            return spans;
        }

        // Keywords, only at the start of a word
        let starts_word = line[..pos].chars().next_back().map_or(true, |c| !is_word_char(c));
        if starts_word {
            if let Some(len) = keyword_at(line, pos) {
                flush_plain(&mut spans, &mut plain_start, pos);
                spans.push(Span::new(SpanKind::Keyword, pos..pos + len));
                pos += len;
                continue;
            }
        }

        // Plain text, advancing by a whole UTF-8 character
        plain_start.get_or_insert(pos);
        pos += line[pos..].chars().next().map_or(1, char::len_utf8);
    }

    flush_plain(&mut spans, &mut plain_start, line.len());
    spans
}

fn flush_plain(spans: &mut Vec<Span>, plain_start: &mut Option<usize>, end: usize) {
    if let Some(start) = plain_start.take() {
        spans.push(Span::new(SpanKind::Plain, start..end));
    }
}

/// Split `text` on `\n` and classify every line.
///
/// The result always has one entry per line, so empty input yields a single
/// empty line.
pub fn highlight(text: &str) -> Vec<HighlightedLine<'_>> {
    let lines: Vec<HighlightedLine<'_>> = text
        .split('\n')
        .map(|line| HighlightedLine {
            text: line,
            spans: tokenize_line(line),
        })
        .collect();

    tracing::trace!(lines = lines.len(), "highlighted text");
    lines
}

/// Check that spans are ordered, contiguous and cover `line` exactly.
pub fn validate_spans(line: &str, spans: &[Span]) -> bool {
    let mut expected_start = 0;
    for span in spans {
        if span.range.start != expected_start || span.range.end > line.len() || span.is_empty() {
            return false;
        }
        expected_start = span.range.end;
    }
    expected_start == line.len()
}
