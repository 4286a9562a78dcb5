//! Canonical JSON bytes for reports.
//!
//! Reports are built as `serde_json::Value`s, whose object map is ordered
//! by key (no crate in this workspace enables `preserve_order`). Compact
//! `serde_json::to_vec` output is therefore already canonical once every
//! number is known to be an integer. Floats are refused so that a digest
//! never depends on float formatting; wall time enters reports only as
//! whole milliseconds.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// The number at `field` (a `/`-separated pointer) was not an integer.
    NonIntegerNumber { field: String, raw: String },
    /// `serde_json` failed to write the value.
    Encode { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { field, raw } => {
                write!(f, "non-integer number at {field}: {raw}")
            }
            Self::Encode { detail } => write!(f, "JSON encoding failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Compact, key-sorted JSON bytes of `value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] for the first number (in key
/// order) that is not an `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut pointer = String::new();
    require_integers(value, &mut pointer)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}

fn require_integers(value: &Value, pointer: &mut String) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            field: if pointer.is_empty() {
                "/".to_owned()
            } else {
                pointer.clone()
            },
            raw: n.to_string(),
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| descend(pointer, &i.to_string(), item)),
        Value::Object(map) => map.iter().try_for_each(|(k, v)| descend(pointer, k, v)),
        _ => Ok(()),
    }
}

fn descend(pointer: &mut String, segment: &str, value: &Value) -> Result<(), CanonError> {
    let len = pointer.len();
    pointer.push('/');
    pointer.push_str(segment);
    let result = require_integers(value, pointer);
    pointer.truncate(len);
    result
}
