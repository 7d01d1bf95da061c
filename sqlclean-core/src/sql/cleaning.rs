//! Text cleaning stages
//!
//! Both cleaners are pure string-to-string functions. They know nothing of
//! each other; the pipeline decides which ones run and in what order.

pub mod blank_lines;
pub mod comments;
pub mod string_aware;

pub use blank_lines::collapse;
pub use comments::{strip, strip_block_comments, strip_line_comments};
pub use string_aware::strip_string_aware;
