//! Serde helpers for host API fields that carry numbers or JSON as text.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Serialize any displayable value as its decimal string.
pub(crate) fn decimal<T: Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Serialize a value as a string holding its compact JSON encoding.
pub(crate) fn json_text<T: Serialize, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let text = serde_json::to_string(value).map_err(S::Error::custom)?;
    serializer.serialize_str(&text)
}
