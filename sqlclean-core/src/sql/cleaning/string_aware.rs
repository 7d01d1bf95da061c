//! String-aware comment stripping
//!
//! The plain [`strip`](super::comments::strip) treats every `--` and `/*` as a
//! comment marker, even inside `'...'` literals or `"..."` identifiers. This
//! module lexes the text with logos first, so quoted text is carried through
//! untouched and only real comments are dropped.
//!
//! Quoted pieces follow SQL rules rather than the highlighter's line rules:
//! a doubled quote (`''`) is an escape, literals may span lines, and an
//! unterminated literal runs to the end of the input.

use logos::{Lexer, Logos};

/// Lexical pieces of SQL text, as far as comment stripping cares.
///
/// The set is exhaustive: every byte of any input belongs to some piece.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlPiece {
    /// `/* ... */` up to the first closer, or to end of input when unterminated
    #[token("/*", block_comment)]
    BlockComment,

    /// `--` up to (not including) the line terminator
    #[regex(r"--[^\r\n]*")]
    LineComment,

    /// `'...'` with `''` escapes
    #[token("'", |lex| quoted(lex, b'\''))]
    SingleQuoted,

    /// `"..."` with `""` escapes
    #[token("\"", |lex| quoted(lex, b'"'))]
    DoubleQuoted,

    /// A lone `/` or `-` that does not open a comment
    #[token("/")]
    #[token("-")]
    Punct,

    /// Anything else, newlines included
    #[regex(r#"[^'"/-]+"#)]
    Text,
}

fn block_comment(lex: &mut Lexer<'_, SqlPiece>) -> bool {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    true
}

/// Consume through the closing `quote`, treating a doubled quote as an escape.
fn quoted(lex: &mut Lexer<'_, SqlPiece>, quote: u8) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut pos = 0;
    let mut len = rest.len();
    while pos < rest.len() {
        if rest[pos] == quote {
            if rest.get(pos + 1) == Some(&quote) {
                pos += 2;
                continue;
            }
            len = pos + 1;
            break;
        }
        pos += 1;
    }
    lex.bump(len);
    true
}

/// Split `text` into pieces with their byte ranges.
pub fn pieces(text: &str) -> Vec<(SqlPiece, logos::Span)> {
    let mut lexer = SqlPiece::lexer(text);
    let mut pieces = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(piece) => pieces.push((piece, lexer.span())),
            Err(()) => {
                // Unreachable while the piece set stays exhaustive.
                tracing::warn!(span = ?lexer.span(), "unlexed slice kept verbatim");
                pieces.push((SqlPiece::Text, lexer.span()));
            }
        }
    }

    pieces
}

fn strip_pass(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (piece, span) in pieces(text) {
        match piece {
            SqlPiece::BlockComment | SqlPiece::LineComment => {}
            _ => out.push_str(&text[span]),
        }
    }
    out
}

/// Remove comments from `text` while leaving quoted literals intact.
///
/// Like the plain stripper this repeats until nothing is removed, since
/// dropping a comment may join its neighbours into a new marker.
pub fn strip_string_aware(text: &str) -> String {
    let mut current = strip_pass(text);
    loop {
        let next = strip_pass(&current);
        if next.len() == current.len() {
            tracing::trace!(
                input_len = text.len(),
                output_len = current.len(),
                "stripped comments (string aware)"
            );
            return current;
        }
        current = next;
    }
}
