//! Per-turn prompt-visibility flags.

use crate::error::IndexOutOfRange;

/// Visibility state for prompts, positionally aligned with the transcript.
///
/// `flags[i]` answers "is the prompt of turn `i` shown?". The log-wide
/// default seeds flags for turns that arrive later via [`ViewState::grow_to`];
/// it is only rewritten by [`ViewState::set_all`], never by
/// [`ViewState::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    flags: Vec<bool>,
    default_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            flags: Vec::new(),
            default_visible: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the flag table with `length` copies of `visible`.
    ///
    /// The log-wide default is left untouched; a full reload starts every
    /// prompt visible without forgetting the user's standing preference for
    /// future appends after a `set_all`.
    pub fn reset(&mut self, length: usize, visible: bool) {
        self.flags.clear();
        self.flags.resize(length, visible);
    }

    /// Extends the flag table to `new_length`, seeding new slots with the
    /// log-wide default. Existing flags keep their values; the table never
    /// shrinks.
    pub fn grow_to(&mut self, new_length: usize) {
        if new_length > self.flags.len() {
            self.flags.resize(new_length, self.default_visible);
        }
    }

    /// Sets the flag for one turn.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] when `index >= len`.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), IndexOutOfRange> {
        let length = self.flags.len();
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = visible;
                Ok(())
            }
            None => Err(IndexOutOfRange { index, length }),
        }
    }

    /// Reads the flag for one turn.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] when `index >= len`.
    pub fn is_visible(&self, index: usize) -> Result<bool, IndexOutOfRange> {
        self.flags.get(index).copied().ok_or(IndexOutOfRange {
            index,
            length: self.flags.len(),
        })
    }

    /// Sets the log-wide default and overwrites every existing flag with it.
    pub fn set_all(&mut self, visible: bool) {
        self.default_visible = visible;
        for flag in &mut self.flags {
            *flag = visible;
        }
    }

    /// The value new flags are seeded with on [`ViewState::grow_to`].
    pub fn default_visible(&self) -> bool {
        self.default_visible
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
