//! Election lifecycle records and their signable digests.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crypto::sha256_concat;
use crate::error::{CoreError, ValidationError};
use crate::serialization::serialize;
use crate::transaction::{TxInput, TxOutput};

/// Version of the signable encoding, hashed ahead of the record bytes.
///
/// Bump this when a field is added to either record so that digests
/// computed under the old layout cannot collide with the new one.
pub const SIGNING_ENCODING_VERSION: u8 = 1;

/// Record that opens an election.
///
/// Carries everything voters need to see (title, description, candidates,
/// elector count) and the signer material of the authorities required to
/// open it. The `id` is assigned once by [`open_election`] and never
/// changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionOpening {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// Raw public keys of the required signers, in order.
    pub signers: Vec<Vec<u8>>,
    /// Raw signatures, positionally aligned with `signers`.
    pub sig_witnesses: Vec<Vec<u8>>,
    /// Hash of the election's governing key.
    pub election_key_hash: Vec<u8>,
    /// Election title.
    pub title: String,
    /// Election description.
    pub description: String,
    /// Number of eligible electors.
    pub total_people: u64,
    /// Candidate identifiers, in ballot order.
    pub candidates: Vec<Vec<u8>>,
    populated: bool,
}

/// Record that closes an election.
///
/// References the opening transaction by hash and names which of its
/// outputs is being closed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionClosing {
    /// Hash of the opening transaction being closed.
    pub ref_tx_id: Vec<u8>,
    /// Raw public keys of the required signers, in order.
    pub signers: Vec<Vec<u8>>,
    /// Raw signatures, positionally aligned with `signers`.
    pub sig_witnesses: Vec<Vec<u8>>,
    /// Label of the referenced transaction output.
    pub ref_output: String,
    /// Hash of the election's governing key; must match the opening record.
    pub election_key_hash: Vec<u8>,
    populated: bool,
}

/// Open an election.
///
/// Assigns a fresh unique identifier, stamps the supplied fields verbatim,
/// and wraps the record in a transaction-output envelope. Fails with a
/// [`ValidationError`] if the key hash is empty or a populated witness
/// list does not line up with the signer list.
pub fn open_election(
    title: &str,
    description: &str,
    election_key_hash: Vec<u8>,
    signers: Vec<Vec<u8>>,
    sig_witnesses: Vec<Vec<u8>>,
    candidates: Vec<Vec<u8>>,
    total_people: u64,
) -> Result<TxOutput, CoreError> {
    validate(&election_key_hash, &signers, &sig_witnesses)?;

    let election = ElectionOpening {
        id: Uuid::new_v4().to_string(),
        signers,
        sig_witnesses,
        election_key_hash,
        title: title.to_string(),
        description: description.to_string(),
        total_people,
        candidates,
        populated: true,
    };
    Ok(TxOutput { election })
}

/// Close an election.
///
/// Pure field assignment — no identifier is generated because the record
/// points at an existing opening transaction instead. Wraps the record in
/// a transaction-input envelope. Validation is the same as for
/// [`open_election`].
pub fn close_election(
    election_key_hash: Vec<u8>,
    ref_tx_id: Vec<u8>,
    ref_output: &str,
    signers: Vec<Vec<u8>>,
    sig_witnesses: Vec<Vec<u8>>,
) -> Result<TxInput, CoreError> {
    validate(&election_key_hash, &signers, &sig_witnesses)?;

    let election = ElectionClosing {
        ref_tx_id,
        signers,
        sig_witnesses,
        ref_output: ref_output.to_string(),
        election_key_hash,
        populated: true,
    };
    Ok(TxInput { election })
}

fn validate(
    election_key_hash: &[u8],
    signers: &[Vec<u8>],
    sig_witnesses: &[Vec<u8>],
) -> Result<(), ValidationError> {
    if election_key_hash.is_empty() {
        return Err(ValidationError::EmptyElectionKeyHash);
    }
    // An empty witness list is a record that has not been signed yet.
    if !sig_witnesses.is_empty() && sig_witnesses.len() != signers.len() {
        return Err(ValidationError::SignerWitnessMismatch {
            signers: signers.len(),
            witnesses: sig_witnesses.len(),
        });
    }
    Ok(())
}

impl ElectionOpening {
    /// The signable view of this record: identifier and signature material
    /// cleared, everything else preserved by value.
    pub fn trimmed(&self) -> Self {
        Self {
            id: String::new(),
            signers: Vec::new(),
            sig_witnesses: Vec::new(),
            ..self.clone()
        }
    }

    /// SHA-256 digest of the canonical encoding of the trimmed record.
    ///
    /// Signers sign over this digest, so it must not move when the
    /// identifier is assigned or witnesses are attached — only the
    /// election content itself participates.
    pub fn signable_digest(&self) -> [u8; 32] {
        let bytes = serialize(&self.trimmed()).expect("election record serialization cannot fail");
        sha256_concat(&[&[SIGNING_ENCODING_VERSION], &bytes])
    }

    /// Whether this record was built by the factory, as opposed to the
    /// empty placeholder an envelope carries on its unused side.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl ElectionClosing {
    /// The signable view of this record: signature material cleared, the
    /// referenced transaction and all other fields preserved by value.
    pub fn trimmed(&self) -> Self {
        Self {
            signers: Vec::new(),
            sig_witnesses: Vec::new(),
            ..self.clone()
        }
    }

    /// SHA-256 digest of the canonical encoding of the trimmed record.
    pub fn signable_digest(&self) -> [u8; 32] {
        let bytes = serialize(&self.trimmed()).expect("election record serialization cannot fail");
        sha256_concat(&[&[SIGNING_ENCODING_VERSION], &bytes])
    }

    /// Whether this record was built by the factory.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl fmt::Display for ElectionOpening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![format!("--ELECTION_OPEN (id): {}", self.id)];
        if self.populated {
            lines.push(format!("(Title): {}", self.title));
            for (i, signer) in self.signers.iter().enumerate() {
                lines.push(format!("(Signer {}): {}", i, hex::encode(signer)));
            }
            for (i, witness) in self.sig_witnesses.iter().enumerate() {
                lines.push(format!("(Witness {}): {}", i, hex::encode(witness)));
            }
            lines.push(format!("(Description): {}", self.description));
            lines.push(format!("(People): {}", self.total_people));
            lines.push(format!(
                "(Election Keyhash): {}",
                hex::encode(&self.election_key_hash)
            ));
            for (i, candidate) in self.candidates.iter().enumerate() {
                lines.push(format!("(Candidate {}): {}", i, hex::encode(candidate)));
            }
        }
        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Display for ElectionClosing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![format!("--ELECTION_CLOSE (tx): {}", hex::encode(&self.ref_tx_id))];
        if self.populated {
            for (i, signer) in self.signers.iter().enumerate() {
                lines.push(format!("(Signer {}): {}", i, hex::encode(signer)));
            }
            for (i, witness) in self.sig_witnesses.iter().enumerate() {
                lines.push(format!("(Witness {}): {}", i, hex::encode(witness)));
            }
            lines.push(format!("(TxOut): {}", self.ref_output));
            lines.push(format!(
                "(Election Keyhash): {}",
                hex::encode(&self.election_key_hash)
            ));
        }
        write!(f, "{}", lines.join("\n"))
    }
}
