//! Transaction types for the Ballot protocol.
//!
//! An election lifecycle is two transactions: an opening record starts the
//! election and a closing record ends it by referencing the opening. Both
//! are carried inside the generic envelope that the mempool stores and
//! addresses by content hash.

mod election;
mod envelope;

pub use election::{
    close_election, open_election, ElectionClosing, ElectionOpening, SIGNING_ENCODING_VERSION,
};
pub use envelope::{Transaction, TxInput, TxOutput};
