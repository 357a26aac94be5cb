//! Error taxonomy for the transcript engine.
//!
//! Two families with different propagation policies:
//!
//! - I/O errors ([`LoadError`], [`WriteError`], [`ClipboardError`]) are
//!   expected and recoverable. The controller leaves prior in-memory state
//!   untouched and returns the error; the user-visible behavior is
//!   "operation did not happen, state unchanged".
//! - Structural errors ([`IndexOutOfRange`]) indicate a programming or
//!   data-integrity bug. They are never swallowed; callers decide whether
//!   to log or display them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a transcript from a file or a byte buffer.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read. The file boundary models every read
    /// failure as not-found; the io source is kept for diagnosis.
    #[error("cannot read transcript {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a JSON array of turn objects.
    #[error("invalid transcript JSON: {reason}")]
    Parse { reason: String },

    /// A turn object is missing a required field, or the field has the
    /// wrong type.
    #[error("turn {index}: missing or invalid field `{field}`")]
    MalformedTurn { field: &'static str, index: usize },
}

/// Access past the end of the transcript or the view-state flag table.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for transcript of length {length}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub length: usize,
}

/// Failure to persist a transcript to a file.
#[derive(Debug, Error)]
#[error("cannot write transcript {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Failure to place text on the clipboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(pub String);

/// Failure of a single-turn copy, which can fail on either side of the
/// serialization: the index lookup or the clipboard transport.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error(transparent)]
    OutOfRange(#[from] IndexOutOfRange),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
