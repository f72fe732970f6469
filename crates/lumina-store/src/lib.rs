//! # lumina-store: Persistence Layer for Lumina POS
//!
//! This crate persists the register's state locally. The medium is a
//! single SQLite file holding one key-value table; each key stores a
//! whole JSON collection (or scalar), mirroring how a browser's local
//! storage would hold the same data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Lumina POS Data Flow                           │
//! │                                                                     │
//! │  UI action (checkout, edit product, record expense)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  lumina-store (THIS CRATE)                    │ │
//! │  │                                                               │ │
//! │  │  ┌────────────┐   ┌────────────────┐   ┌──────────────────┐  │ │
//! │  │  │   Store    │   │  Repositories  │   │     KvStore      │  │ │
//! │  │  │ (pool.rs)  │   │ (repository/)  │   │     (kv.rs)      │  │ │
//! │  │  │            │   │                │   │                  │  │ │
//! │  │  │ open/seed  │──►│ ProductRepo    │──►│ read_collection  │  │ │
//! │  │  │ migrations │   │ SaleRepo       │   │ write_collection │  │ │
//! │  │  │            │   │ ExpenseRepo …  │   │ (whole values)   │  │ │
//! │  │  └────────────┘   └────────────────┘   └──────────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite file: kv_store(key TEXT PRIMARY KEY, value TEXT)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All domain logic (totals, reconciliation deltas, reporting) lives in
//! `lumina-core`; this crate only moves state in and out of the medium.
//!
//! ## Module Organization
//!
//! - [`pool`] - store handle, configuration, open/seed sequence
//! - [`kv`] - the key-value medium and its fail-soft read contract
//! - [`migrations`] - embedded schema migrations
//! - [`seed`] - first-run demonstration data
//! - [`error`] - store error types
//! - [`repository`] - typed repositories per collection
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lumina_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("lumina.db")).await?;
//!
//! let products = store.products().list().await;
//! let sale = store
//!     .sales()
//!     .create_sale(items, discount, method, "cashier")
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::KvStore;
pub use pool::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::expense::ExpenseRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
pub use repository::settings::SettingsRepository;
pub use repository::user::UserRepository;
