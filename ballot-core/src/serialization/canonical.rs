//! Canonical bincode configuration.
//!
//! Field order is the declaration order of the type, integers are
//! fixed-width little-endian, and variable-length fields are
//! length-prefixed. Trailing bytes are rejected on decode.

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::SerializationError;

fn config() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Serialize a value into its canonical byte encoding.
///
/// Identical inputs produce identical bytes on every platform; this is the
/// encoding that signable digests and content hashes are computed over.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    config()
        .serialize(value)
        .map_err(|e| SerializationError::EncodeFailed(e.to_string()))
}

/// Deserialize a value from its canonical byte encoding.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    config()
        .deserialize(bytes)
        .map_err(|e| SerializationError::DecodeFailed(e.to_string()))
}
