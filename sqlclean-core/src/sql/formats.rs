//! Output formats for highlighted text
//!
//! This module contains the renderer registry and the built-in renderers.

pub mod ansi;
pub mod html;
pub mod json;
pub mod plain;
pub mod registry;

pub use ansi::AnsiRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use plain::PlainRenderer;
pub use registry::{FormatError, FormatRegistry, Renderer};
