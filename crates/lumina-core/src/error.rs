//! # Error Types
//!
//! Domain-specific error types for lumina-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  lumina-core errors (this file)                                     │
//! │  └── CoreError   - cart and domain rule failures                    │
//! │                                                                     │
//! │  lumina-store errors (separate crate)                               │
//! │  └── StoreError  - persistence failures                             │
//! │                                                                     │
//! │  Flow: CoreError / StoreError → UI collaborator → user notice       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read paths in this system never raise; the errors below cover cart
//! bounds only. Reconciliation itself has no business-rule failures by
//! design (over-return bounding is the caller's responsibility).

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Adding or raising a cart quantity past the snapshot's stock.
    ///
    /// The register UI plays the error cue and leaves the cart unchanged
    /// (or clamps to the available stock, for direct quantity edits).
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Cart operation referenced a product that is not in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(String),

    /// Quantity must be at least 1 for cart entry.
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
