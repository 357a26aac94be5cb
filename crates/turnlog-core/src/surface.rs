//! The render-surface contract.

use crate::turn::Turn;

/// What the controller needs from a display.
///
/// The controller mutates state first, then notifies the surface with the
/// narrowest update that covers the change:
///
/// - `rebuild_all` after a load or a toggle-all, where most elements change;
/// - `patch_one` after a single-turn toggle, so an interactive surface can
///   keep scroll position and untouched elements intact;
/// - `append_elements` after an append, carrying only the new tail.
///
/// Surfaces may degrade a narrow update to a coarser one (a dumb surface can
/// treat `patch_one` as a full redraw) but the controller never widens one.
pub trait RenderSurface {
    /// Discard all elements and rebuild from the full snapshot.
    fn rebuild_all(&mut self, turns: &[(Turn, bool)]);

    /// Re-render the element at `index` with a new visibility flag.
    fn patch_one(&mut self, index: usize, turn: &Turn, visible: bool);

    /// Add elements for `turns` after the existing ones.
    fn append_elements(&mut self, turns: &[(Turn, bool)]);
}

/// A surface that renders nothing. Used by headless callers that want the
/// engine without a display.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn rebuild_all(&mut self, _turns: &[(Turn, bool)]) {}
    fn patch_one(&mut self, _index: usize, _turn: &Turn, _visible: bool) {}
    fn append_elements(&mut self, _turns: &[(Turn, bool)]) {}
}
