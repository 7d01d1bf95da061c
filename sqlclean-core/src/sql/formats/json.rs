//! JSON span dump
//!
//! A document renders as an array of lines, each line an array of
//! `{"kind": ..., "text": ...}` objects.

use super::registry::{FormatError, Renderer};
use crate::sql::highlight::HighlightedLine;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Span lists as JSON"
    }

    fn render_line(&self, line: &HighlightedLine<'_>) -> Result<String, FormatError> {
        serde_json::to_string(line).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn render_document(&self, lines: &[HighlightedLine<'_>]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(lines)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
