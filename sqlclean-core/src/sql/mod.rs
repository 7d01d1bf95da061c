//! Main module for sqlclean library functionality

pub mod cleaning;
pub mod formats;
pub mod highlight;
pub mod loader;
pub mod pipeline;
pub mod transforms;
