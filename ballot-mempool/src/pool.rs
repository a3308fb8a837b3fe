//! The pending-transaction pool.

use std::collections::HashMap;

use ballot_core::transaction::Transaction;
use parking_lot::RwLock;

use crate::error::{PoolError, PoolResult};

/// Default maximum number of transactions held in the pool.
pub const DEFAULT_POOL_CAPACITY: usize = 5000;

/// Default number of transactions selected per block.
pub const DEFAULT_TXS_PER_BLOCK: usize = 10;

/// Pool configuration, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct MempoolConfig {
    /// Maximum number of transactions the pool will accept.
    pub capacity: usize,

    /// How many transactions block assembly asks for by default.
    pub txs_per_block: usize,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_POOL_CAPACITY,
            txs_per_block: DEFAULT_TXS_PER_BLOCK,
        }
    }
}

/// Concurrency-safe holding area for unconfirmed transactions.
///
/// Entries are keyed by the transaction's content hash. A single
/// reader/writer lock guards the map: `add`, `delete`, and `clear` take
/// the exclusive mode, everything else the shared mode. Returned
/// transactions are independent clones; the map itself is never exposed.
pub struct Mempool {
    txs: RwLock<HashMap<[u8; 32], Transaction>>,
    config: MempoolConfig,
}

impl Mempool {
    /// Create an empty pool with the given configuration.
    pub fn new(config: MempoolConfig) -> Self {
        Self {
            txs: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Create an empty pool with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MempoolConfig::default())
    }

    /// The pool's configuration.
    #[inline]
    pub fn config(&self) -> &MempoolConfig {
        &self.config
    }

    /// Add a transaction, keyed by its content hash.
    ///
    /// Adding a hash that is already present is a no-op, never an
    /// overwrite. Fails only when the pool is at capacity.
    pub fn add(&self, tx: Transaction) -> PoolResult<()> {
        let hash = tx.hash();
        let mut txs = self.txs.write();

        if txs.contains_key(&hash) {
            drop(txs);
            tracing::trace!(hash = %hex::encode(&hash[..4]), "duplicate transaction ignored");
            return Ok(());
        }
        if txs.len() >= self.config.capacity {
            drop(txs);
            tracing::debug!(
                hash = %hex::encode(&hash[..4]),
                capacity = self.config.capacity,
                "rejecting transaction, pool full"
            );
            return Err(PoolError::PoolFull {
                capacity: self.config.capacity,
            });
        }

        txs.insert(hash, tx);
        let size = txs.len();
        drop(txs);

        tracing::trace!(hash = %hex::encode(&hash[..4]), size, "transaction added");
        Ok(())
    }

    /// Look up a transaction by content hash.
    ///
    /// Absence is `None`; a present transaction is returned as a clone.
    pub fn get(&self, hash: &[u8; 32]) -> Option<Transaction> {
        self.txs.read().get(hash).cloned()
    }

    /// Remove a transaction by content hash. Removing an absent hash is a
    /// no-op.
    pub fn delete(&self, hash: &[u8; 32]) {
        let removed = self.txs.write().remove(hash).is_some();
        if removed {
            tracing::trace!(hash = %hex::encode(&hash[..4]), "transaction deleted");
        }
    }

    /// Select up to `max_count` transactions for block assembly.
    ///
    /// This is a snapshot, not a removal: selected transactions stay in
    /// the pool until the caller deletes them after block commit. The
    /// order of the returned batch is arbitrary, and with more than
    /// `max_count` entries in the pool which ones are chosen is
    /// unspecified.
    pub fn select_for_block(&self, max_count: usize) -> Vec<Transaction> {
        if max_count == 0 {
            return Vec::new();
        }

        let txs = self.txs.read();
        let pool_size = txs.len();
        let selected: Vec<Transaction> = txs.values().take(max_count).cloned().collect();
        drop(txs);

        tracing::debug!(
            selected = selected.len(),
            pool_size,
            "selected transactions for block"
        );
        selected
    }

    /// Check whether a transaction with this content hash is present.
    pub fn contains(&self, hash: &[u8; 32]) -> bool {
        self.txs.read().contains_key(hash)
    }

    /// Number of transactions currently in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.txs.read().len()
    }

    /// Check if the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.txs.read().is_empty()
    }

    /// Remove all transactions.
    pub fn clear(&self) {
        self.txs.write().clear();
    }
}

impl Default for Mempool {
    fn default() -> Self {
        Self::with_defaults()
    }
}
