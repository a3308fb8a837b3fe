//! Ed25519 signer key pairs and verification over raw bytes.
//!
//! Election records carry signers and signature witnesses as raw byte
//! strings, so the API here works in that form: public keys are 32 raw
//! bytes and signatures 64 raw bytes, parsed only at verification time.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::CryptoError;

/// Length in bytes of a raw public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length in bytes of a raw signature.
pub const SIGNATURE_LEN: usize = 64;

/// An Ed25519 key pair for a required signer of an election transaction.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair using the OS random number generator.
    pub fn generate() -> Self {
        KeyPair {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create a key pair from a 32-byte secret key.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Self {
        KeyPair {
            signing_key: SigningKey::from_bytes(bytes),
        }
    }

    /// The raw public key bytes, in the form election records store in
    /// their `signers` list.
    pub fn public_bytes(&self) -> Vec<u8> {
        self.signing_key.verifying_key().as_bytes().to_vec()
    }

    /// Sign a message (typically a signable digest), returning the raw
    /// signature bytes in the form stored in `sig_witnesses`.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.signing_key.sign(message).to_bytes().to_vec()
    }
}

/// Verify a raw signature against a raw public key and message.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
    let key_bytes: [u8; PUBLIC_KEY_LEN] = public_key
        .try_into()
        .map_err(|_| CryptoError::InvalidPublicKey)?;
    let key = VerifyingKey::from_bytes(&key_bytes).map_err(|_| CryptoError::InvalidPublicKey)?;

    let sig_bytes: [u8; SIGNATURE_LEN] = signature
        .try_into()
        .map_err(|_| CryptoError::InvalidSignature)?;
    let sig = ed25519_dalek::Signature::from_bytes(&sig_bytes);

    key.verify(message, &sig)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}
