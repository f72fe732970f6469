//! # lumina-core: Pure Business Logic for Lumina POS
//!
//! This crate is the **heart** of Lumina POS. It contains all business
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Lumina POS Architecture                        │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  UI shell (out of scope)                    │   │
//! │  │   Register ──► Cart ──► Checkout ──► Reports/Dashboard      │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │              ★ lumina-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌────────┐ ┌───────┐ ┌──────┐ ┌───────────┐ ┌──────────┐ │   │
//! │  │  │ types  │ │ money │ │ cart │ │ reconcile │ │reporting │ │   │
//! │  │  └────────┘ └───────┘ └──────┘ └───────────┘ └──────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └──────────────────────────┬──────────────────────────────────┘   │
//! │                             │                                       │
//! │  ┌──────────────────────────▼──────────────────────────────────┐   │
//! │  │              lumina-store (persistence layer)               │   │
//! │  │          key-value collections, seeding, repositories       │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Expense, Settings, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The active shopping cart
//! - [`reconcile`] - Sale/stock reconciliation math
//! - [`reporting`] - Read-only metric aggregations
//! - [`hooks`] - Trait seams for out-of-scope collaborators
//! - [`ids`] - Record identifier generation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, always
//! 2. **No I/O**: storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Snapshots**: sales own frozen copies of product data

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod hooks;
pub mod ids;
pub mod money;
pub mod reconcile;
pub mod reporting;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;
