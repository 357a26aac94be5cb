//! Input events fed to the reducer.

use crossterm::event::Event;

/// Events processed by [`crate::update::update`].
#[derive(Debug)]
pub enum UiEvent {
    /// Emitted once per loop iteration with the current terminal size, so
    /// layout-dependent state (scroll clamping) updates before input.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),
}
