//! OSC 52 clipboard writes
//!
//! The cleaned text is sent to the terminal as `ESC ] 52 ; c ; <base64> BEL`,
//! which most modern terminal emulators forward to the system clipboard. The
//! sequence goes to stderr so stdout stays clean for pipes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, IsTerminal, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard not available: stderr is not a terminal")]
    NotAvailable,
    #[error("clipboard payload too large ({size} > {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },
    #[error("clipboard write failed: {0}")]
    WriteError(#[from] io::Error),
}

pub struct Clipboard {
    available: bool,
    max_payload: usize,
}

impl Clipboard {
    /// Common terminal limit on the base64 payload.
    pub const DEFAULT_MAX_PAYLOAD: usize = 74_994;

    pub fn new(available: bool) -> Self {
        Self {
            available,
            max_payload: Self::DEFAULT_MAX_PAYLOAD,
        }
    }

    /// Available when stderr is attached to a terminal.
    pub fn detect() -> Self {
        Self::new(io::stderr().is_terminal())
    }

    pub fn with_max_payload(mut self, max_payload: usize) -> Self {
        self.max_payload = max_payload;
        self
    }

    /// Write `content` to the clipboard through `writer`.
    pub fn set(&self, content: &str, writer: &mut impl Write) -> Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::NotAvailable);
        }
        let encoded = STANDARD.encode(content.as_bytes());
        if encoded.len() > self.max_payload {
            return Err(ClipboardError::PayloadTooLarge {
                size: encoded.len(),
                max: self.max_payload,
            });
        }
        writer.write_all(format!("\x1b]52;c;{encoded}\x07").as_bytes())?;
        writer.flush()?;
        tracing::debug!(bytes = content.len(), "clipboard write");
        Ok(())
    }

    /// Write `content` to the clipboard via stderr.
    pub fn copy(&self, content: &str) -> Result<(), ClipboardError> {
        self.set(content, &mut io::stderr().lock())
    }
}
