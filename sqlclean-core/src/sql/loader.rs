//! Source loading utilities
//!
//! `SourceLoader` holds SQL text read from a file, a reader or a string and
//! runs the pipeline on it. Used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use sqlclean_core::sql::loader::SourceLoader;
//!
//! let loader = SourceLoader::from_path("query.sql")?;
//! let output = loader.process(&CleanOptions::default());
//! ```

use crate::sql::formats::{FormatError, Renderer};
use crate::sql::pipeline::{CleanOptions, Pipeline, PipelineOutput};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading sources
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error when reading a file
    #[error("cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// IO error when reading a stream
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
    /// Rendering failed
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// SQL source with pipeline shortcuts
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::File {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source file");
        Ok(SourceLoader { source })
    }

    /// Load everything from a reader, such as stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        tracing::debug!(bytes = source.len(), "loaded source stream");
        Ok(SourceLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Clean the source without rendering
    pub fn clean(&self, options: &CleanOptions) -> String {
        Pipeline::from_options(options).clean(&self.source)
    }

    /// Clean and render as HTML markup lines
    pub fn process(&self, options: &CleanOptions) -> PipelineOutput {
        Pipeline::from_options(options).process(&self.source)
    }

    /// Clean and render with the given renderer
    pub fn process_with(
        &self,
        options: &CleanOptions,
        renderer: &dyn Renderer,
    ) -> Result<PipelineOutput, LoaderError> {
        Ok(Pipeline::from_options(options).process_with(&self.source, renderer)?)
    }

    /// Get a reference to the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
