//! # Ballot Core
//!
//! Core types, cryptography, and canonical serialization for the Ballot
//! protocol — a ledger-based voting protocol.
//!
//! This crate provides the foundation for the other Ballot crates:
//! - Election lifecycle transaction records (opening and closing)
//! - The signable canonical encoding and its SHA-256 digest
//! - The generic transaction envelope and its content hash
//! - Ed25519 signer primitives and SHA-256 hashing
//! - Deterministic binary serialization

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod crypto;
pub mod error;
pub mod serialization;
pub mod transaction;

// Re-export commonly used types at crate root
pub use crypto::{sha256, sha256_concat, verify, KeyPair};
pub use error::{CoreError, CryptoError, SerializationError, ValidationError};
pub use transaction::{
    close_election, open_election, ElectionClosing, ElectionOpening, Transaction, TxInput,
    TxOutput, SIGNING_ENCODING_VERSION,
};
