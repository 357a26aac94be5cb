//! Full-screen transcript viewer.

pub mod clipboard;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::path::PathBuf;

use anyhow::{Context, Result};
pub use runtime::ViewerRuntime;
use turnlog_core::{StdFileSystem, TranscriptController, Turn};

use crate::clipboard::TerminalClipboard;
use crate::state::AppState;
use crate::surface::TranscriptView;

/// Runs the interactive viewer.
///
/// With a path, the transcript is loaded from it before the terminal is
/// taken over, so load errors print normally. Without one, `seed` turns
/// populate the transcript and save/reload are disabled.
///
/// # Errors
/// Returns an error when stderr is not a terminal, the initial load fails,
/// or the terminal cannot be configured.
pub fn run_viewer(path: Option<PathBuf>, seed: Vec<Turn>) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The viewer requires a terminal.\n\
             Use `turnlog cat FILE` for non-interactive output."
        );
    }

    let mut controller =
        TranscriptController::new(TranscriptView::new(), TerminalClipboard, StdFileSystem);

    if let Some(ref p) = path {
        controller
            .load_path(p)
            .with_context(|| format!("Failed to load transcript from {}", p.display()))?;
    } else {
        controller.append_turns(seed);
    }

    let state = AppState::new(controller, path);
    let mut runtime = ViewerRuntime::new(state)?;
    runtime.run()
}
