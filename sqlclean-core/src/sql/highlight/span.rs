//! Span model for highlighted lines

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::ops::Range;

/// Classification of a span of text within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Plain,
    String,
    Comment,
    Keyword,
}

impl SpanKind {
    /// Short lowercase name, used for markup classes and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::String => "string",
            SpanKind::Comment => "comment",
            SpanKind::Keyword => "keyword",
        }
    }
}

/// A classified byte range within a single line.
///
/// Ranges satisfy `start <= end <= line.len()` and fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub range: Range<usize>,
}

impl Span {
    pub fn new(kind: SpanKind, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "span range must be ordered");
        Span { kind, range }
    }

    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// The text this span covers within `line`.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range.clone()]
    }
}

/// One source line together with its spans.
///
/// Spans are contiguous and ordered, so concatenating their text gives back
/// `text` exactly. An empty line has no spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine<'a> {
    pub text: &'a str,
    pub spans: Vec<Span>,
}

impl<'a> HighlightedLine<'a> {
    /// Iterate over `(kind, text)` pairs in order.
    pub fn segments(&self) -> impl Iterator<Item = (SpanKind, &'a str)> + '_ {
        let text = self.text;
        self.spans.iter().map(move |span| (span.kind, span.text(text)))
    }

    /// Keyword texts on this line, in order.
    pub fn keywords(&self) -> Vec<&'a str> {
        self.segments()
            .filter(|(kind, _)| *kind == SpanKind::Keyword)
            .map(|(_, text)| text)
            .collect()
    }
}

#[derive(Serialize)]
struct Segment<'a> {
    kind: SpanKind,
    text: &'a str,
}

impl Serialize for HighlightedLine<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.spans.len()))?;
        for (kind, text) in self.segments() {
            seq.serialize_element(&Segment { kind, text })?;
        }
        seq.end()
    }
}
