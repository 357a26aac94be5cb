//! UI effect types.
//!
//! Effects are the I/O commands returned by the reducer for the runtime to
//! execute. The reducer stays pure in the sense that matters here: it
//! mutates in-memory state only and never touches the clipboard or the
//! file system directly.

/// Effects returned by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Copy the turn at the given index to the clipboard.
    CopyTurn(usize),
    /// Copy the whole transcript to the clipboard.
    CopyAll,
    /// Save the transcript to the current file.
    Save,
    /// Reload the transcript from the current file.
    Reload,
}
