//! Deterministic participant identifier derivation

use sha2::{Digest, Sha256};

use crate::table::{Table, Value};

/// Derive the participant identifier for one value.
///
/// SHA-256 over the canonical UTF-8 string form, rendered as 64 lowercase
/// hex characters. Pure: the same value always yields the same identifier.
pub fn participant_id(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.canonical().as_bytes());
    hex::encode(hasher.finalize())
}

/// Derive identifiers for every row of one column, preserving row order.
pub fn derive_ids(table: &Table, column_index: usize) -> Vec<Value> {
    table
        .column(column_index)
        .into_iter()
        .map(|value| Value::Text(participant_id(value)))
        .collect()
}
