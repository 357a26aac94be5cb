//! The transcript controller: the only mutation entry point.
//!
//! Every state change flows through here so the store, the view state, and
//! the render surface move in lock step. The invariants the controller
//! maintains:
//!
//! - view-state length always equals store length after any operation;
//! - a failed load leaves store, view state, and surface untouched;
//! - each mutation sends exactly one surface update, the narrowest that
//!   covers the change.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ClipboardError, CopyError, IndexOutOfRange, LoadError, WriteError};
use crate::format::{self, CanonicalJson};
use crate::ports::{ClipboardPort, FileSystemPort};
use crate::store::TranscriptStore;
use crate::surface::RenderSurface;
use crate::turn::Turn;
use crate::view_state::ViewState;

/// Coordinates the store, the view state, and the injected capabilities.
pub struct TranscriptController<S, C, F> {
    store: TranscriptStore,
    view: ViewState,
    surface: S,
    clipboard: C,
    fs: F,
}

impl<S, C, F> TranscriptController<S, C, F>
where
    S: RenderSurface,
    C: ClipboardPort,
    F: FileSystemPort,
{
    /// Creates a controller over an empty transcript.
    pub fn new(surface: S, clipboard: C, fs: F) -> Self {
        Self {
            store: TranscriptStore::new(),
            view: ViewState::new(),
            surface,
            clipboard,
            fs,
        }
    }

    /// Creates a controller pre-populated with `turns`, all prompts visible.
    pub fn with_turns(surface: S, clipboard: C, fs: F, turns: Vec<Turn>) -> Self {
        let mut controller = Self::new(surface, clipboard, fs);
        controller.append_turns(turns);
        controller
    }

    // ======================================================================
    // Persistence
    // ======================================================================

    /// Loads the transcript from the file at `path`, replacing the current
    /// contents and resetting every prompt to visible.
    ///
    /// # Errors
    /// Returns [`LoadError`] on read or parse failure; in-memory state and
    /// the surface are left exactly as they were.
    pub fn load_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let bytes = self.fs.read_file(path)?;
        self.load_bytes(&bytes)
    }

    /// Loads the transcript from raw bytes. All-or-nothing: the bytes are
    /// parsed completely before any state changes.
    ///
    /// # Errors
    /// Returns [`LoadError`] on parse failure; state is untouched.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let turns = format::parse_transcript(bytes)?;
        let len = turns.len();
        self.store.replace_all(turns);
        self.view.reset(len, true);
        let snapshot = self.snapshot();
        self.surface.rebuild_all(&snapshot);
        info!(turns = len, "transcript loaded");
        Ok(())
    }

    /// Serializes the whole transcript and writes it to `path`.
    ///
    /// # Errors
    /// Returns [`WriteError`] when the file cannot be written.
    pub fn save_path(&self, path: &Path) -> Result<(), WriteError> {
        self.fs.write_file(path, &self.save_bytes())?;
        info!(turns = self.store.len(), path = %path.display(), "transcript saved");
        Ok(())
    }

    /// The canonical JSON bytes for the whole transcript.
    pub fn save_bytes(&self) -> Vec<u8> {
        self.serialize_all()
    }

    // ======================================================================
    // Serialization and clipboard
    // ======================================================================

    /// Canonical JSON for the turn at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] when `index >= len`.
    pub fn serialize_turn(&self, index: usize) -> Result<Vec<u8>, IndexOutOfRange> {
        let turn = self.store.get(index)?;
        Ok(turn.to_canonical_json().into_bytes())
    }

    /// Canonical JSON for the whole transcript. Always succeeds; an empty
    /// transcript serializes as `[]`.
    pub fn serialize_all(&self) -> Vec<u8> {
        self.store.all().to_canonical_json().into_bytes()
    }

    /// Copies the turn at `index` to the clipboard as canonical JSON.
    ///
    /// # Errors
    /// Returns [`CopyError`] on a bad index or clipboard failure.
    pub fn copy_turn(&mut self, index: usize) -> Result<(), CopyError> {
        let turn = self.store.get(index)?;
        let json = turn.to_canonical_json();
        self.clipboard.set_text(&json)?;
        debug!(index, "turn copied to clipboard");
        Ok(())
    }

    /// Copies the whole transcript to the clipboard as canonical JSON.
    ///
    /// # Errors
    /// Returns [`ClipboardError`] when the clipboard is unavailable.
    pub fn copy_all(&mut self) -> Result<(), ClipboardError> {
        let json = self.store.all().to_canonical_json();
        self.clipboard.set_text(&json)?;
        debug!(turns = self.store.len(), "transcript copied to clipboard");
        Ok(())
    }

    // ======================================================================
    // Visibility
    // ======================================================================

    /// Flips the prompt visibility of the turn at `index` and patches just
    /// that element on the surface.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] when `index >= len`; nothing changes.
    pub fn toggle_turn(&mut self, index: usize) -> Result<(), IndexOutOfRange> {
        let visible = !self.view.is_visible(index)?;
        self.view.set_visible(index, visible)?;
        let turn = self.store.get(index)?.clone();
        self.surface.patch_one(index, &turn, visible);
        debug!(index, visible, "prompt visibility toggled");
        Ok(())
    }

    /// Sets the log-wide default and every per-turn flag to `visible`, then
    /// rebuilds the surface.
    pub fn toggle_all(&mut self, visible: bool) {
        self.view.set_all(visible);
        let snapshot = self.snapshot();
        self.surface.rebuild_all(&snapshot);
        debug!(visible, "all prompt visibility set");
    }

    // ======================================================================
    // Appending
    // ======================================================================

    /// Appends `turns` after the existing transcript. Existing visibility
    /// flags are preserved; the new turns get the log-wide default. The
    /// surface receives only the new tail.
    pub fn append_turns(&mut self, turns: Vec<Turn>) {
        if turns.is_empty() {
            return;
        }
        let start = self.store.len();
        let count = turns.len();
        self.store.append(turns);
        self.view.grow_to(self.store.len());
        let tail: Vec<(Turn, bool)> = self.store.all()[start..]
            .iter()
            .map(|turn| (turn.clone(), self.view.default_visible()))
            .collect();
        self.surface.append_elements(&tail);
        debug!(count, total = self.store.len(), "turns appended");
    }

    // ======================================================================
    // Accessors
    // ======================================================================

    pub fn store(&self) -> &TranscriptStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn snapshot(&self) -> Vec<(Turn, bool)> {
        self.store
            .all()
            .iter()
            .enumerate()
            .map(|(i, turn)| (turn.clone(), self.view.is_visible(i).unwrap_or(true)))
            .collect()
    }
}
