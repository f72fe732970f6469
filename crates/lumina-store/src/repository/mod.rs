//! # Repositories
//!
//! Typed access to each persisted collection. Every repository wraps the
//! same [`crate::kv::KvStore`]; a mutation is read-modify-write of the
//! whole collection value, matching the medium's replace-only contract.
//!
//! - [`product`] - catalog CRUD and manual stock adjustments
//! - [`sale`] - sale creation and amendment (the reconciliation engine)
//! - [`expense`] - expense CRUD
//! - [`user`] - accounts, authentication, credential updates
//! - [`settings`] - settings with merge-over-defaults loading
//! - [`cart`] - the persisted active cart

pub mod cart;
pub mod expense;
pub mod product;
pub mod sale;
pub mod settings;
pub mod user;
