//! Transcript store and view-state management for Turnlog.
//!
//! This crate is the engine behind the viewer: the ordered collection of
//! conversational turns, the per-turn prompt-visibility flags, the canonical
//! JSON format shared by file persistence and clipboard export, and the
//! controller that keeps a render surface consistent with state after every
//! mutation.
//!
//! The crate is deliberately presentation-free. Rendering, clipboard
//! transport, and file access are injected through the contracts in
//! [`surface`] and [`ports`], so the whole engine runs deterministically
//! under test with recording fakes.

pub mod controller;
pub mod error;
pub mod format;
pub mod ports;
pub mod store;
pub mod surface;
pub mod turn;
pub mod view_state;

pub use controller::TranscriptController;
pub use error::{ClipboardError, CopyError, IndexOutOfRange, LoadError, WriteError};
pub use format::CanonicalJson;
pub use ports::{ClipboardPort, FileSystemPort, StdFileSystem};
pub use store::TranscriptStore;
pub use surface::{NullSurface, RenderSurface};
pub use turn::Turn;
pub use view_state::ViewState;
