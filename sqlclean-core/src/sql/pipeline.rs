//! Pipeline orchestration
//!
//! Applies the cleaners selected by [`CleanOptions`] and highlights the
//! result. The cleaned text is returned alongside the rendering so callers
//! can copy or export it without markup.
//!
//! Data flows one way:
//!
//! ```text
//! raw text -> [strip] -> [collapse] -> cleaned text -> tokenizer -> rendered lines
//! ```

use crate::sql::formats::{FormatError, HtmlRenderer, Renderer};
use crate::sql::highlight::{highlight, Span};
use crate::sql::transforms::stages::{CollapseBlankLines, StripComments, StripCommentsStringAware};
use crate::sql::transforms::Transform;

/// Which cleaners run.
///
/// Stripping always runs before collapsing when both are enabled.
/// `string_aware` only matters when `remove_comments` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    pub remove_comments: bool,
    pub remove_blank_lines: bool,
    pub string_aware: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions {
            remove_comments: true,
            remove_blank_lines: true,
            string_aware: false,
        }
    }
}

impl CleanOptions {
    /// Options that leave the text untouched.
    pub fn keep_all() -> Self {
        CleanOptions {
            remove_comments: false,
            remove_blank_lines: false,
            string_aware: false,
        }
    }
}

/// Result of running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// The text fed to the tokenizer, without any markup
    pub cleaned_text: String,
    /// One rendered string per line of `cleaned_text`
    pub rendered_lines: Vec<String>,
}

impl PipelineOutput {
    /// All rendered lines joined with the HTML line break marker.
    pub fn rendered_markup(&self) -> String {
        self.rendered_lines.join(crate::sql::formats::html::LINE_BREAK)
    }
}

/// A cleaning pipeline assembled from options.
pub struct Pipeline {
    cleaner: Transform<String, String>,
}

impl Pipeline {
    /// Build the cleaning chain for `options`.
    pub fn from_options(options: &CleanOptions) -> Self {
        let mut cleaner = Transform::identity();
        if options.remove_comments {
            cleaner = if options.string_aware {
                cleaner.then(StripCommentsStringAware)
            } else {
                cleaner.then(StripComments)
            };
        }
        if options.remove_blank_lines {
            cleaner = cleaner.then(CollapseBlankLines);
        }
        Pipeline { cleaner }
    }

    /// Wrap an arbitrary cleaning transform.
    pub fn from_transform(cleaner: Transform<String, String>) -> Self {
        Pipeline { cleaner }
    }

    /// Names of the cleaning stages, in the order they run
    pub fn stage_names(&self) -> &[&'static str] {
        self.cleaner.stage_names()
    }

    /// Run the cleaning stages only.
    pub fn clean(&self, text: &str) -> String {
        let cleaned = self.cleaner.run(text.to_string());
        tracing::debug!(
            stages = ?self.stage_names(),
            input_len = text.len(),
            output_len = cleaned.len(),
            "cleaned text"
        );
        cleaned
    }

    /// Clean `text` and render it as HTML markup lines.
    pub fn process(&self, text: &str) -> PipelineOutput {
        let cleaned_text = self.clean(text);
        let rendered_lines = tokenize(&cleaned_text);
        PipelineOutput {
            cleaned_text,
            rendered_lines,
        }
    }

    /// Clean `text` and render it with `renderer`.
    pub fn process_with(
        &self,
        text: &str,
        renderer: &dyn Renderer,
    ) -> Result<PipelineOutput, FormatError> {
        let cleaned_text = self.clean(text);
        let rendered_lines = renderer.render_lines(&highlight(&cleaned_text))?;
        Ok(PipelineOutput {
            cleaned_text,
            rendered_lines,
        })
    }
}

/// Highlight `text` and render each line as HTML markup.
///
/// Always returns at least one line; empty text gives `[""]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let renderer = HtmlRenderer;
    highlight(text)
        .iter()
        .map(|line| renderer.render_markup(line))
        .collect()
}

/// Highlight `text` and return the spans of each line.
pub fn tokenize_spans(text: &str) -> Vec<Vec<Span>> {
    highlight(text).into_iter().map(|line| line.spans).collect()
}

/// Clean and highlight `text` according to `options`.
pub fn process(text: &str, options: &CleanOptions) -> PipelineOutput {
    Pipeline::from_options(options).process(text)
}

/// Clean `text` according to `options` and render with `renderer`.
pub fn process_with(
    text: &str,
    options: &CleanOptions,
    renderer: &dyn Renderer,
) -> Result<PipelineOutput, FormatError> {
    Pipeline::from_options(options).process_with(text, renderer)
}
