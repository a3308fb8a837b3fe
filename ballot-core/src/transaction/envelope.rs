//! Generic transaction envelope.
//!
//! A transaction holds an input side and an output side; whichever side an
//! election lifecycle step does not use stays as the unpopulated default.
//! The envelope's content hash covers everything, signatures included, and
//! is the address the mempool keys by.

use serde::{Deserialize, Serialize};

use crate::crypto::sha256;
use crate::serialization::serialize;
use crate::transaction::{ElectionClosing, ElectionOpening};

/// Output side of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// The election opening record, if this output carries one.
    pub election: ElectionOpening,
}

/// Input side of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// The election closing record, if this input carries one.
    pub election: ElectionClosing,
}

/// A full transaction as stored in the mempool and included in blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Input side.
    pub input: TxInput,
    /// Output side.
    pub output: TxOutput,
}

impl Transaction {
    /// Build a transaction from an opening envelope.
    pub fn open(output: TxOutput) -> Self {
        Self {
            input: TxInput::default(),
            output,
        }
    }

    /// Build a transaction from a closing envelope.
    pub fn close(input: TxInput) -> Self {
        Self {
            input,
            output: TxOutput::default(),
        }
    }

    /// Content hash of the whole transaction, signatures included.
    ///
    /// This is the SHA-256 of the canonical encoding and serves as the
    /// transaction's address in the mempool and on chain.
    pub fn hash(&self) -> [u8; 32] {
        let bytes = serialize(self).expect("transaction serialization cannot fail");
        sha256(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;
    use crate::serialization::deserialize;
    use crate::transaction::{close_election, open_election};

    fn open_tx() -> Transaction {
        let output = open_election(
            "Board Vote",
            "Annual board election",
            vec![7u8; 32],
            vec![vec![1u8; 32]],
            vec![],
            vec![b"alice".to_vec()],
            100,
        )
        .unwrap();
        Transaction::open(output)
    }

    #[test]
    fn test_hash_is_deterministic() {
        let tx = open_tx();
        assert_eq!(tx.hash(), tx.hash());
        assert_eq!(tx.hash().len(), 32);
    }

    #[test]
    fn test_hash_covers_signatures() {
        // Unlike the signable digest, the content hash moves when a
        // witness is attached.
        let kp = KeyPair::generate();
        let tx = open_tx();
        let mut signed = tx.clone();

        let digest = signed.output.election.signable_digest();
        signed.output.election.sig_witnesses.push(kp.sign(&digest));

        assert_ne!(tx.hash(), signed.hash());
    }

    #[test]
    fn test_open_and_close_sides() {
        let open = open_tx();
        assert!(open.output.election.is_populated());
        assert!(!open.input.election.is_populated());

        let input = close_election(
            vec![7u8; 32],
            open.hash().to_vec(),
            "election-out-0",
            vec![vec![1u8; 32]],
            vec![],
        )
        .unwrap();
        let close = Transaction::close(input);
        assert!(close.input.election.is_populated());
        assert!(!close.output.election.is_populated());
        assert_eq!(close.input.election.ref_tx_id, open.hash().to_vec());
    }

    #[test]
    fn test_hash_survives_canonical_roundtrip() {
        // The pool key must be reproducible from the wire form.
        let tx = open_tx();
        let bytes = crate::serialization::serialize(&tx).unwrap();
        let recovered: Transaction = deserialize(&bytes).unwrap();
        assert_eq!(tx, recovered);
        assert_eq!(tx.hash(), recovered.hash());
    }
}
