//! Viewer application state.

use std::path::PathBuf;

use turnlog_core::{StdFileSystem, TranscriptController};

use crate::clipboard::TerminalClipboard;
use crate::surface::TranscriptView;

/// The controller as wired for the interactive viewer.
pub type ViewerController =
    TranscriptController<TranscriptView, TerminalClipboard, StdFileSystem>;

/// All state the viewer runtime needs between frames.
pub struct AppState {
    /// Engine state plus the transcript display it drives.
    pub controller: ViewerController,
    /// Index of the selected turn. Meaningless when the transcript is
    /// empty; always clamped to `len - 1` otherwise.
    pub cursor: usize,
    /// File backing the transcript, if any. Save and reload need one.
    pub file_path: Option<PathBuf>,
    /// Message shown in the status line until the next key press.
    pub status: Option<String>,
    /// Last known terminal size, updated by `UiEvent::Frame`.
    pub viewport: (u16, u16),
    pub should_quit: bool,
}

impl AppState {
    pub fn new(controller: ViewerController, file_path: Option<PathBuf>) -> Self {
        Self {
            controller,
            cursor: 0,
            file_path,
            status: None,
            viewport: (80, 24),
            should_quit: false,
        }
    }

    /// Width available for transcript text.
    pub fn content_width(&self) -> usize {
        usize::from(self.viewport.0)
    }

    /// Height available for transcript lines (the status line takes one
    /// row).
    pub fn content_height(&self) -> usize {
        usize::from(self.viewport.1).saturating_sub(1)
    }

    /// Clamps the cursor after the transcript changes length.
    pub fn clamp_cursor(&mut self) {
        let len = self.controller.store().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
