//! Ordered storage for transcript turns.

use crate::error::IndexOutOfRange;
use crate::turn::Turn;

/// The ordered collection of turns.
///
/// Order is insertion order and never changes after insertion; indices
/// handed out by [`TranscriptStore::all`] stay valid until the next
/// `replace_all` or `append`. The store knows nothing about visibility or
/// rendering.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TranscriptStore {
    turns: Vec<Turn>,
}

impl TranscriptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `turns` in the given order.
    pub fn with_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    /// Discards the current contents and adopts `turns` wholesale.
    pub fn replace_all(&mut self, turns: Vec<Turn>) {
        self.turns = turns;
    }

    /// Appends `turns` after the existing contents, preserving their
    /// relative order.
    pub fn append(&mut self, turns: Vec<Turn>) {
        self.turns.extend(turns);
    }

    /// Returns the turn at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Turn, IndexOutOfRange> {
        self.turns.get(index).ok_or(IndexOutOfRange {
            index,
            length: self.turns.len(),
        })
    }

    /// All turns in order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| Turn::new(i as f64, format!("user{i}"), format!("p{i}"), format!("c{i}")))
            .collect()
    }

    #[test]
    fn replace_all_discards_previous_contents() {
        let mut store = TranscriptStore::with_turns(sample(3));
        store.replace_all(sample(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].user, "user0");
    }

    #[test]
    fn append_preserves_relative_order() {
        let mut store = TranscriptStore::with_turns(sample(2));
        let tail = vec![
            Turn::new(10.0, "a", "p", "c"),
            Turn::new(11.0, "b", "p", "c"),
        ];
        store.append(tail);
        assert_eq!(store.len(), 4);
        assert_eq!(store.all()[2].user, "a");
        assert_eq!(store.all()[3].user, "b");
    }

    #[test]
    fn append_empty_is_a_no_op() {
        let mut store = TranscriptStore::with_turns(sample(2));
        let before = store.clone();
        store.append(Vec::new());
        assert_eq!(store, before);
    }

    #[test]
    fn get_out_of_range_reports_index_and_length() {
        let store = TranscriptStore::with_turns(sample(2));
        let err = store.get(5).unwrap_err();
        assert_eq!(err, IndexOutOfRange { index: 5, length: 2 });
    }

    #[test]
    fn get_on_empty_store_fails() {
        let store = TranscriptStore::new();
        assert!(store.get(0).is_err());
    }
}
