//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  READ PATHS                                                         │
//! │  absent key / malformed value / driver failure                      │
//! │       → empty collection + warn!, NEVER an error to the caller      │
//! │                                                                     │
//! │  WRITE PATHS                                                        │
//! │  storage rejection (quota, disabled, locked)                        │
//! │       → StoreError::WriteRejected, surfaced to the operator as a    │
//! │         blocking notice; the in-memory effect is NOT guaranteed     │
//! │         durable and no rollback is attempted                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal to the process. Worst case is a visible
//! data-loss warning.

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The medium rejected a write. The operator must be shown a blocking
    /// notice; data already mutated in memory may not survive a reload.
    #[error("Could not save data for '{key}': {message}")]
    WriteRejected { key: String, message: String },

    /// Could not open the underlying medium.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema migration failed on open.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Anything else from the driver.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Wraps a driver failure as a rejected write on the given key.
    pub fn write_rejected(key: impl Into<String>, err: impl ToString) -> Self {
        StoreError::WriteRejected {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("pool is closed".to_string()),
            sqlx::Error::PoolTimedOut => {
                StoreError::ConnectionFailed("pool timed out".to_string())
            }
            other => StoreError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rejected_message() {
        let err = StoreError::write_rejected("pos-products", "disk full");
        assert_eq!(
            err.to_string(),
            "Could not save data for 'pos-products': disk full"
        );
    }
}
