//! Side effects behind the copy and link rows.
//!
//! The app only talks to these traits, so tests can record actions instead
//! of touching the real clipboard or browser.

use std::fmt::Debug;
use std::io::{self, Write};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

/// Destination for copy actions.
pub trait Clipboard: Send + Debug {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Opens external links.
pub trait LinkOpener: Send + Debug {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Copies through the terminal with an OSC 52 escape sequence.
///
/// The terminal emulator sets the system clipboard, which also works over
/// SSH where no local clipboard is reachable.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write + Send + Debug> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send + Debug> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the clipboard and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send + Debug> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        let encoded = STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{}\x07", encoded).context("Failed to write to terminal")?;
        self.out.flush()?;
        debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}

/// Opens links in the system web browser.
#[derive(Debug, Default)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        webbrowser::open(url).with_context(|| format!("Failed to open {}", url))?;
        debug!("Opened {}", url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("0xabc").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;MHhhYmM=\x07");
    }

    #[test]
    fn test_osc52_empty_text() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("").unwrap();

        assert_eq!(clipboard.into_inner(), b"\x1b]52;c;\x07");
    }
}
