//! # Sale Repository
//!
//! The reconciliation engine: keeps product stock consistent with the
//! net effect of all sales.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  create_sale(items, discount, method, user)                         │
//! │       │                                                             │
//! │       ├── 1. build sale (totals invariant established here)         │
//! │       ├── 2. write sale to the front of pos-sales                   │
//! │       └── 3. decrement each matching product's stock, write catalog │
//! │                                                                     │
//! │  The two writes are ONE LOGICAL UNIT to the caller but are not      │
//! │  atomic: if step 2 lands and step 3 is rejected, stock is stale.    │
//! │  No rollback exists. Known limitation, not a guarantee.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Amend Flow
//! Replaces the persisted sale, then adds the net per-product delta back
//! to stock (reduction in sold quantity returns stock, increase takes
//! more). Products deleted since the sale are skipped. The engine never
//! re-validates quantity bounds; callers keep edited quantities within
//! the original ones.

use chrono::Utc;
use tracing::{debug, warn};

use lumina_core::ids::{generate_id, SALE_ID_PREFIX};
use lumina_core::reconcile::{amendment_deltas, apply_deltas, build_sale, sale_deltas};
use lumina_core::{CartItem, Money, PaymentMethod, Product, Sale};

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_PRODUCTS, KEY_SALES};

/// Repository for completed sales and their stock reconciliation.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    kv: KvStore,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(kv: KvStore) -> Self {
        SaleRepository { kv }
    }

    /// All sales, newest first.
    pub async fn list(&self) -> Vec<Sale> {
        self.kv.read_collection(KEY_SALES).await
    }

    /// A single sale by id.
    pub async fn get(&self, id: &str) -> Option<Sale> {
        self.list().await.into_iter().find(|s| s.id == id)
    }

    /// Creates a sale from checkout inputs and decrements stock.
    ///
    /// ## Arguments
    /// * `items` - cart snapshot, every quantity >= 1
    /// * `discount` - absolute amount, not validated against the total
    /// * `payment_method` - tender used
    /// * `user` - acting cashier's username
    ///
    /// ## Returns
    /// The persisted sale (fresh id, current timestamp, computed totals).
    ///
    /// No stock floor is enforced; a stale cart can drive stock negative.
    pub async fn create_sale(
        &self,
        items: Vec<CartItem>,
        discount: Money,
        payment_method: PaymentMethod,
        user: &str,
    ) -> StoreResult<Sale> {
        let sale = build_sale(
            items,
            discount,
            payment_method,
            user,
            generate_id(SALE_ID_PREFIX),
            Utc::now(),
        );
        debug!(id = %sale.id, total = %sale.total, final_total = %sale.final_total, "Creating sale");

        // Newest first, like the register's history view expects
        let mut sales = self.list().await;
        sales.insert(0, sale.clone());
        self.kv.write_collection(KEY_SALES, &sales).await?;

        // Second half of the logical unit; see module docs for the
        // partial-failure mode
        let mut products: Vec<Product> = self.kv.read_collection(KEY_PRODUCTS).await;
        if apply_deltas(&mut products, &sale_deltas(&sale.items)) {
            self.kv.write_collection(KEY_PRODUCTS, &products).await?;
        }

        Ok(sale)
    }

    /// Amends a persisted sale and reconciles stock with the net change.
    ///
    /// `edited` must carry the same id as `original`, items trimmed to
    /// quantity > 0, totals recomputed, and any amendment-log entry
    /// already appended by the caller.
    ///
    /// A missing sale id is a silent no-op (logged, not surfaced);
    /// callers should only offer amendment on sales known to exist.
    pub async fn amend_sale(&self, original: &Sale, edited: Sale) -> StoreResult<()> {
        let mut sales = self.list().await;
        let Some(slot) = sales.iter_mut().find(|s| s.id == original.id) else {
            warn!(id = %original.id, "Sale to amend not found, skipping");
            return Ok(());
        };
        debug!(id = %original.id, "Amending sale");

        *slot = edited.clone();
        self.kv.write_collection(KEY_SALES, &sales).await?;

        let deltas = amendment_deltas(&original.items, &edited.items);
        if deltas.is_empty() {
            return Ok(());
        }

        let mut products: Vec<Product> = self.kv.read_collection(KEY_PRODUCTS).await;
        if apply_deltas(&mut products, &deltas) {
            self.kv.write_collection(KEY_PRODUCTS, &products).await?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// End-to-end reconciliation scenarios live in tests/reconciliation.rs;
// these cover the repository surface itself.
