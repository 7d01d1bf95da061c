//! # sqlclean-core
//!
//! Comment stripping, blank-line collapsing and lightweight highlighting for
//! SQL text.
//!
//! The crate is lexical only: it never parses SQL. Every function takes a
//! string and returns a new one, with no shared state between calls.
//!
//! Layout
//!
//! src/sql
//!   ├── cleaning     Comment stripper (plain and string-aware) and blank-line collapser
//!   ├── highlight    Keyword set, span model and the line tokenizer
//!   ├── formats      Renderer trait, registry and the html/ansi/json/plain renderers
//!   ├── transforms   Composable cleaning stages
//!   ├── pipeline     Options-driven orchestration
//!   └── loader       Reading sources from files, readers and strings
//!
//! The four entry points most callers need are re-exported here: [`strip`],
//! [`collapse`], [`tokenize`] and [`process`].

pub mod sql;

pub use sql::cleaning::{collapse, strip, strip_string_aware};
pub use sql::pipeline::{
    process, process_with, tokenize, tokenize_spans, CleanOptions, Pipeline, PipelineOutput,
};
