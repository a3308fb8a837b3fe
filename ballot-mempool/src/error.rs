//! Pool error types.

use thiserror::Error;

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors that can occur during pool operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// The pool is at capacity and cannot accept new transactions.
    #[error("mempool full (capacity {capacity})")]
    PoolFull {
        /// Configured capacity that was reached.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PoolError::PoolFull { capacity: 5000 };
        assert_eq!(err.to_string(), "mempool full (capacity 5000)");
    }
}
