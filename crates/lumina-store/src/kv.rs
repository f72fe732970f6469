//! # Key-Value Layer
//!
//! The single shared persistence medium: a `kv_store` table whose rows
//! each hold one whole JSON value under a fixed string key.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  read_collection(key)                                               │
//! │    key absent ────────────────► empty vec                           │
//! │    value unparsable ──────────► empty vec + warn! (silent reset)    │
//! │    driver failure ────────────► empty vec + warn!                   │
//! │    (read paths NEVER raise)                                         │
//! │                                                                     │
//! │  write_collection(key, records)                                     │
//! │    replaces the entire value                                        │
//! │    medium rejects the write ──► StoreError::WriteRejected           │
//! │    (best-effort: callers must assume prior in-memory effects may    │
//! │     not be durable; no rollback exists)                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one writer (one register); no isolation exists between
//! concurrent writers and none is attempted. Last write wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, error, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Storage Keys
// =============================================================================
// Stable names: data written by earlier deployments must keep loading, so
// these strings never change.

/// Product catalog collection.
pub const KEY_PRODUCTS: &str = "pos-products";
/// Completed sales collection (newest first).
pub const KEY_SALES: &str = "pos-sales";
/// Stored user accounts collection.
pub const KEY_USERS: &str = "pos-users";
/// Expenses collection (newest first).
pub const KEY_EXPENSES: &str = "pos-expenses";
/// Active cart scalar.
pub const KEY_CART: &str = "pos-cart";
/// Settings scalar.
pub const KEY_SETTINGS: &str = "pos-settings";

// =============================================================================
// KvStore
// =============================================================================

/// Typed access to the key-value medium.
///
/// Cheap to clone; repositories each hold one.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    /// Creates a KvStore over an open pool.
    pub fn new(pool: SqlitePool) -> Self {
        KvStore { pool }
    }

    /// Raw value under a key, if present.
    pub async fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    /// Whether a key exists at all (used by first-run seeding).
    pub async fn contains_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get_raw(key).await?.is_some())
    }

    /// Replaces the raw value under a key.
    pub async fn put_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(key = %key, error = %e, "Storage rejected write");
            StoreError::write_rejected(key, e)
        })?;
        Ok(())
    }

    /// Reads a typed scalar. Absent, malformed or unreadable → `None`.
    pub async fn read_scalar<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.get_raw(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %key, error = %e, "Read failed, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                // Malformed data is a silent reset, never an error upstream
                warn!(key = %key, error = %e, "Stored value unparsable, resetting to default");
                None
            }
        }
    }

    /// Writes a typed scalar, replacing any previous value.
    pub async fn write_scalar<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::Internal(format!("serialize '{}': {}", key, e)))?;
        debug!(key = %key, bytes = raw.len(), "Writing value");
        self.put_raw(key, &raw).await
    }

    /// Reads a whole collection. Fails soft to an empty sequence.
    pub async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_scalar(key).await.unwrap_or_default()
    }

    /// Replaces a whole collection.
    pub async fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        self.write_scalar(key, &records).await
    }
}
