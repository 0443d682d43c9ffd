use std::io::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use pick4_model::{Pick4Error, Result};

/// Accepts text destined for the system clipboard.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Builds the OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard writes through the terminal's OSC 52 support.
///
/// The terminal, not this process, owns the clipboard, so a terminal that
/// ignores OSC 52 silently drops the copy.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|source| Pick4Error::io("<terminal>", source))?;
        debug!(bytes = text.len(), "clipboard sequence written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("1234"), "\x1b]52;c;MTIzNA==\x07");
    }

    #[test]
    fn clipboard_writes_sequence_to_writer() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("0000").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;MDAwMA==\x07");
    }
}
