//! Unstyled renderer
//!
//! Emits span text as-is, so the output equals the input text. Useful as a
//! check that highlighting lost nothing.

use super::registry::{FormatError, Renderer};
use crate::sql::highlight::HighlightedLine;

pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Span text without styling"
    }

    fn render_line(&self, line: &HighlightedLine<'_>) -> Result<String, FormatError> {
        Ok(line.segments().map(|(_, text)| text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::highlight::highlight;

    #[test]
    fn test_reconstructs_input() {
        let sql = "SELECT 'a' -- c\r\n\n  FROM t";
        let rendered = PlainRenderer.render_document(&highlight(sql)).unwrap();
        assert_eq!(rendered, sql);
    }
}
