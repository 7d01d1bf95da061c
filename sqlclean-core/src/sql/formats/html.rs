//! HTML markup renderer
//!
//! Strings, comments and keywords are wrapped in `<span class="sql-...">`;
//! plain text is emitted bare. Every span's text is escaped first, so the
//! output is well-formed whatever the input holds. Lines are joined with
//! `<br>`.

use super::registry::{FormatError, Renderer};
use crate::sql::highlight::{HighlightedLine, SpanKind};
use std::borrow::Cow;

/// Line break marker between rendered lines.
pub const LINE_BREAK: &str = "<br>";

/// Markup class prefix for highlighted spans.
pub const CLASS_PREFIX: &str = "sql-";

pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Render one line; never fails.
    pub fn render_markup(&self, line: &HighlightedLine<'_>) -> String {
        let mut out = String::with_capacity(line.text.len());
        for (kind, text) in line.segments() {
            let escaped = escape(text);
            match kind {
                SpanKind::Plain => out.push_str(&escaped),
                _ => {
                    out.push_str("<span class=\"");
                    out.push_str(CLASS_PREFIX);
                    out.push_str(kind.name());
                    out.push_str("\">");
                    out.push_str(&escaped);
                    out.push_str("</span>");
                }
            }
        }
        out
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML spans with sql-* classes, <br> between lines"
    }

    fn line_break(&self) -> &str {
        LINE_BREAK
    }

    fn render_line(&self, line: &HighlightedLine<'_>) -> Result<String, FormatError> {
        Ok(self.render_markup(line))
    }
}

/// Escape `&`, `<` and `>` for use in markup text.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
