//! Transaction mempool for the Ballot protocol.
//!
//! Holds unconfirmed transactions between ingestion from the network and
//! inclusion in a block. The pool is keyed by content hash, guarded by a
//! single reader/writer lock, and safe to share across threads.

mod error;
mod pool;

pub use error::{PoolError, PoolResult};
pub use pool::{Mempool, MempoolConfig, DEFAULT_POOL_CAPACITY, DEFAULT_TXS_PER_BLOCK};
