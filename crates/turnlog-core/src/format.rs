//! Canonical transcript JSON: serialization and parsing.
//!
//! The on-disk and on-clipboard format is identical: a JSON array of
//! objects with exactly the keys `timestamp`, `user`, `prompt`, and
//! `completion`, pretty-printed with 2-space indentation. A single turn
//! serializes as one such object. Parsing is strict about required fields
//! and types but ignores unknown keys, so hand-edited files with extra
//! annotations still load.

use serde_json::Value;

use crate::error::LoadError;
use crate::turn::Turn;

// ==========================================================================
// Serialization
// ==========================================================================

/// Types that render to the canonical transcript JSON.
pub trait CanonicalJson {
    fn to_canonical_json(&self) -> String;
}

impl CanonicalJson for Turn {
    fn to_canonical_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "null".to_string())
    }
}

impl CanonicalJson for [Turn] {
    fn to_canonical_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "[]".to_string())
    }
}

// ==========================================================================
// Parsing
// ==========================================================================

/// Parses transcript bytes into turns.
///
/// All-or-nothing: any structural problem rejects the whole input.
///
/// # Errors
/// [`LoadError::Parse`] when the bytes are not JSON, the document is not an
/// array, or an element is not an object; [`LoadError::MalformedTurn`] when
/// a required field is missing or has the wrong type, naming the first
/// offending field and the element index.
pub fn parse_transcript(bytes: &[u8]) -> Result<Vec<Turn>, LoadError> {
    let doc: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::Parse {
        reason: e.to_string(),
    })?;
    let Value::Array(elements) = doc else {
        return Err(LoadError::Parse {
            reason: "top-level value is not an array".to_string(),
        });
    };

    let mut turns = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        if !element.is_object() {
            return Err(LoadError::Parse {
                reason: format!("turn {index} is not an object"),
            });
        }
        turns.push(Turn {
            timestamp: number_field(element, "timestamp", index)?,
            user: string_field(element, "user", index)?,
            prompt: string_field(element, "prompt", index)?,
            completion: string_field(element, "completion", index)?,
        });
    }
    Ok(turns)
}

fn number_field(element: &Value, field: &'static str, index: usize) -> Result<f64, LoadError> {
    element
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(LoadError::MalformedTurn { field, index })
}

fn string_field(element: &Value, field: &'static str, index: usize) -> Result<String, LoadError> {
    element
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(LoadError::MalformedTurn { field, index })
}
