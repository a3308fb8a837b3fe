//! Error types for the Ballot core crate.

use std::fmt;

/// Top-level error type for ballot-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Cryptographic operation failed.
    Crypto(CryptoError),
    /// Serialization or deserialization failed.
    Serialization(SerializationError),
    /// A record failed construction-time validation.
    Validation(ValidationError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Crypto(e) => write!(f, "crypto error: {}", e),
            CoreError::Serialization(e) => write!(f, "serialization error: {}", e),
            CoreError::Validation(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<CryptoError> for CoreError {
    fn from(e: CryptoError) -> Self {
        CoreError::Crypto(e)
    }
}

impl From<SerializationError> for CoreError {
    fn from(e: SerializationError) -> Self {
        CoreError::Serialization(e)
    }
}

impl From<ValidationError> for CoreError {
    fn from(e: ValidationError) -> Self {
        CoreError::Validation(e)
    }
}

/// Errors related to cryptographic operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// The public key bytes are malformed.
    InvalidPublicKey,
    /// The signature bytes are malformed.
    InvalidSignature,
    /// Signature verification failed (signature doesn't match message/key).
    SignatureVerificationFailed,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidPublicKey => write!(f, "invalid public key bytes"),
            CryptoError::InvalidSignature => write!(f, "invalid signature bytes"),
            CryptoError::SignatureVerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Errors related to serialization and deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to encode data to bytes.
    EncodeFailed(String),
    /// Failed to decode data from bytes.
    DecodeFailed(String),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::EncodeFailed(msg) => write!(f, "encode failed: {}", msg),
            SerializationError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SerializationError {}

/// Errors raised by the record factories at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The witness list is populated but its length differs from the
    /// signer list.
    SignerWitnessMismatch {
        /// Number of required signers.
        signers: usize,
        /// Number of signature witnesses supplied.
        witnesses: usize,
    },
    /// The election key hash is empty.
    EmptyElectionKeyHash,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::SignerWitnessMismatch { signers, witnesses } => {
                write!(
                    f,
                    "signer/witness count mismatch: {signers} signers, {witnesses} witnesses"
                )
            }
            ValidationError::EmptyElectionKeyHash => {
                write!(f, "election key hash is empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CoreError::Crypto(CryptoError::InvalidPublicKey);
        assert!(e.to_string().contains("invalid public key"));

        let e = CoreError::Validation(ValidationError::SignerWitnessMismatch {
            signers: 3,
            witnesses: 1,
        });
        assert!(e.to_string().contains("3 signers"));
        assert!(e.to_string().contains("1 witnesses"));

        let e = CoreError::Serialization(SerializationError::DecodeFailed("truncated".into()));
        assert!(e.to_string().contains("decode failed"));
    }

    #[test]
    fn test_error_conversion() {
        let err: CoreError = ValidationError::EmptyElectionKeyHash.into();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyElectionKeyHash)
        ));
    }
}
