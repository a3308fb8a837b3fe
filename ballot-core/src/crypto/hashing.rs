//! SHA-256 hashing utilities.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA-256 hash of several slices fed in order.
///
/// Equivalent to hashing the concatenation without building it. Used to
/// prefix the signing-encoding version ahead of a record's canonical bytes.
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
