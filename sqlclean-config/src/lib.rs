//! Shared configuration loader for sqlclean.
//!
//! `defaults/sqlclean.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior cannot drift. Callers layer user
//! files and flag overrides on top via [`Loader`] before deserializing into
//! [`SqlCleanConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use sqlclean_core::CleanOptions;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/sqlclean.default.toml");

/// Name of the optional per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = "sqlclean.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SqlCleanConfig {
    pub cleaning: CleaningConfig,
    pub output: OutputConfig,
}

/// Which cleaners run.
#[derive(Debug, Clone, Deserialize)]
pub struct CleaningConfig {
    pub remove_comments: bool,
    pub remove_blank_lines: bool,
    pub string_aware: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// `text` for cleaned text, otherwise a renderer name
    pub format: String,
}

impl SqlCleanConfig {
    /// The pipeline options this configuration selects.
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            remove_comments: self.cleaning.remove_comments,
            remove_blank_lines: self.cleaning.remove_blank_lines,
            string_aware: self.cleaning.string_aware,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SqlCleanConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SqlCleanConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.cleaning.remove_comments);
        assert!(config.cleaning.remove_blank_lines);
        assert!(!config.cleaning.string_aware);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn defaults_match_core_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.clean_options(), CleanOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("cleaning.remove_comments", false)
            .expect("override to apply")
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.cleaning.remove_comments);
        assert!(config.cleaning.remove_blank_lines);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn layers_partial_file_over_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[cleaning]\nstring_aware = true\n").expect("write file");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(config.cleaning.string_aware);
        assert!(config.cleaning.remove_comments);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("definitely/not/here/sqlclean.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("definitely/not/here/sqlclean.toml")
            .build()
            .expect("config to build");
        assert!(config.cleaning.remove_blank_lines);
    }
}
