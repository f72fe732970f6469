//! # Store Handle
//!
//! Opening the key-value medium: pool creation, migration, first-run
//! seeding, and repository access.
//!
//! ## Open Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  StoreConfig::new(path)                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Store::open(config)                                                │
//! │       ├── create/connect SQLite pool (WAL, create-if-missing)       │
//! │       ├── run embedded migrations (kv_store table)                  │
//! │       └── seed absent keys (demo catalog, accounts, empty lists)    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  store.products() / .sales() / .users() / ...                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Test Substitution
//! `StoreConfig::in_memory()` gives a fully isolated store per test, the
//! in-memory fake the repository interface is designed around.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::kv::KvStore;
use crate::migrations;
use crate::repository::cart::CartRepository;
use crate::repository::expense::ExpenseRepository;
use crate::repository::product::ProductRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::settings::SettingsRepository;
use crate::repository::user::UserRepository;
use crate::seed;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite file backing the key-value medium.
    pub database_path: PathBuf,

    /// Maximum pool connections. One register needs very few.
    pub max_connections: u32,

    /// Connection acquire timeout.
    pub connect_timeout: Duration,

    /// Whether to seed absent keys on open.
    pub seed_on_open: bool,
}

impl StoreConfig {
    /// Configuration for an on-disk store at `path` (created if missing).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 2,
            connect_timeout: Duration::from_secs(30),
            seed_on_open: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets whether absent keys are seeded on open.
    pub fn seed_on_open(mut self, seed: bool) -> Self {
        self.seed_on_open = seed;
        self
    }

    /// Isolated in-memory store (for tests).
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(":memory:"),
            // In-memory requires a single connection; more would each see
            // their own empty database
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
            seed_on_open: true,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle to the opened store; hands out repositories.
#[derive(Debug, Clone)]
pub struct Store {
    kv: KvStore,
    pool: SqlitePool,
}

impl Store {
    /// Opens (and if necessary creates) the store.
    ///
    /// Runs migrations and, unless disabled, seeds absent keys with the
    /// demonstration data.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(path = %config.database_path.display(), "Opening store");

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        migrations::run_migrations(&pool).await?;

        let store = Store {
            kv: KvStore::new(pool.clone()),
            pool,
        };

        if config.seed_on_open {
            seed::initialize(&store.kv).await?;
        }

        Ok(store)
    }

    /// Direct key-value access. Prefer the typed repositories.
    pub fn kv(&self) -> &KvStore {
        &self.kv
    }

    /// The underlying connection pool.
    ///
    /// ## Usage
    /// For maintenance queries not covered by the key-value layer.
    /// Prefer the repositories when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Product catalog repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.kv.clone())
    }

    /// Sales repository (the reconciliation engine).
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.kv.clone())
    }

    /// User accounts repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.kv.clone())
    }

    /// Expense repository.
    pub fn expenses(&self) -> ExpenseRepository {
        ExpenseRepository::new(self.kv.clone())
    }

    /// Settings repository.
    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.kv.clone())
    }

    /// Active cart repository.
    pub fn cart(&self) -> CartRepository {
        CartRepository::new(self.kv.clone())
    }

    /// Checks the medium is responsive.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Closes the pool. Repository calls fail afterwards.
    pub async fn close(&self) {
        info!("Closing store");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_opens_and_seeds() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        assert!(store.health_check().await);

        let products = store.products().list().await;
        assert_eq!(products.len(), 8);
    }

    #[tokio::test]
    async fn test_seeding_can_be_disabled() {
        let store = Store::open(StoreConfig::in_memory().seed_on_open(false))
            .await
            .unwrap();
        assert!(store.products().list().await.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/test.db").max_connections(5);
        assert_eq!(config.max_connections, 5);
        assert!(config.seed_on_open);
    }
}
