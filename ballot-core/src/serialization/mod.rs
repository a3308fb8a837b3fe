//! Deterministic binary serialization.
//!
//! Everything that is hashed or signed in the Ballot protocol goes through
//! this module, so that one byte encoding is canonical across platforms
//! and versions.

mod canonical;

pub use canonical::{deserialize, serialize};
