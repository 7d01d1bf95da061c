//! Renderer registry for highlighted output
//!
//! This module provides a pluggable registry of output formats. Each format
//! implements the `Renderer` trait and can be registered with `FormatRegistry`.

use crate::sql::highlight::HighlightedLine;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for highlighted-line renderers
///
/// Implementors turn classified lines into a textual representation, one
/// rendered string per source line, joined by the renderer's line break.
pub trait Renderer: Send + Sync {
    /// The name of this format (e.g., "html", "ansi")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Marker placed between rendered lines
    fn line_break(&self) -> &str {
        "\n"
    }

    /// Render a single line
    fn render_line(&self, line: &HighlightedLine<'_>) -> Result<String, FormatError>;

    /// Render every line separately
    fn render_lines(&self, lines: &[HighlightedLine<'_>]) -> Result<Vec<String>, FormatError> {
        lines.iter().map(|line| self.render_line(line)).collect()
    }

    /// Render all lines as one document
    fn render_document(&self, lines: &[HighlightedLine<'_>]) -> Result<String, FormatError> {
        Ok(self.render_lines(lines)?.join(self.line_break()))
    }
}

/// Registry of renderers
///
/// Provides a centralized registry for all available output formats.
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        self.renderers.get(name).map(|r| r.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Look up a renderer, failing with `FormatNotFound`
    pub fn require(&self, name: &str) -> Result<&dyn Renderer, FormatError> {
        self.get(name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Render lines as a document using the specified format
    pub fn render(&self, lines: &[HighlightedLine<'_>], format: &str) -> Result<String, FormatError> {
        self.require(format)?.render_document(lines)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default renderers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::HtmlRenderer);
        registry.register(super::AnsiRenderer);
        registry.register(super::JsonRenderer);
        registry.register(super::PlainRenderer);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
