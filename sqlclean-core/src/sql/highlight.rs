//! Lightweight SQL highlighting: strings, line comments and keywords.

pub mod keywords;
pub mod span;
pub mod tokenizer;

pub use keywords::{is_keyword, KEYWORDS};
pub use span::{HighlightedLine, Span, SpanKind};
pub use tokenizer::{highlight, tokenize_line, validate_spans};
