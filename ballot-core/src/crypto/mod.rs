//! Cryptographic primitives for the Ballot protocol.
//!
//! This module provides:
//! - SHA-256 hashing over single and concatenated inputs
//! - Ed25519 signer key pairs producing the raw byte form that election
//!   records carry in their `signers` and `sig_witnesses` lists

mod hashing;
mod signing;

pub use hashing::{sha256, sha256_concat};
pub use signing::{verify, KeyPair, PUBLIC_KEY_LEN, SIGNATURE_LEN};
