//! Terminal renderer using ANSI styling

use super::registry::{FormatError, Renderer};
use crate::sql::highlight::{HighlightedLine, SpanKind};
use crossterm::style::Stylize;
use std::fmt::Write;

pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn name(&self) -> &str {
        "ansi"
    }

    fn description(&self) -> &str {
        "Colored terminal output"
    }

    fn render_line(&self, line: &HighlightedLine<'_>) -> Result<String, FormatError> {
        let mut out = String::with_capacity(line.text.len() * 2);
        for (kind, text) in line.segments() {
            let written = match kind {
                SpanKind::Plain => write!(out, "{text}"),
                SpanKind::Keyword => write!(out, "{}", text.blue().bold()),
                SpanKind::String => write!(out, "{}", text.green()),
                SpanKind::Comment => write!(out, "{}", text.dark_grey().italic()),
            };
            written.map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }
        Ok(out)
    }
}
