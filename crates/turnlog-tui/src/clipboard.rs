//! Clipboard transport for the viewer.
//!
//! Two transports, tried in order:
//! 1. OSC 52 escape sequence (the terminal forwards it, works over SSH)
//! 2. System clipboard via `arboard`

use std::io::Write;

use base64::Engine;
use turnlog_core::{ClipboardError, ClipboardPort};

/// Clipboard backed by the hosting terminal, with a system fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalClipboard;

impl TerminalClipboard {
    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        // OSC 52: ESC ] 52 ; c ; <base64> ESC \  ('c' targets the system
        // clipboard selection)
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]52;c;{encoded}\x1b\\")
            .map_err(|e| ClipboardError(format!("OSC 52 write failed: {e}")))?;
        stdout
            .flush()
            .map_err(|e| ClipboardError(format!("OSC 52 flush failed: {e}")))?;
        Ok(())
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError(format!("system clipboard unavailable: {e}")))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError(format!("system clipboard write failed: {e}")))?;
        Ok(())
    }
}

impl ClipboardPort for TerminalClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if Self::copy_osc52(text).is_ok() {
            return Ok(());
        }
        Self::copy_system(text)
    }
}
