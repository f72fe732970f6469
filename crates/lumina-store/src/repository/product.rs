//! # Product Repository
//!
//! Catalog operations: CRUD plus manual stock adjustments with an
//! append-only history log.
//!
//! Stock changes caused by *sales* do not go through this module; the
//! reconciliation engine in [`crate::repository::sale`] applies those.
//! This separation is why the stock invariant ("seed plus signed sum of
//! deltas") depends on callers never writing stock by hand.

use chrono::Utc;
use tracing::{debug, warn};

use lumina_core::ids::{generate_id, PRODUCT_ID_PREFIX};
use lumina_core::{Product, StockAdjustment};

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_PRODUCTS};

/// Repository for the product catalog.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    kv: KvStore,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(kv: KvStore) -> Self {
        ProductRepository { kv }
    }

    /// The whole catalog, in stored order.
    pub async fn list(&self) -> Vec<Product> {
        self.kv.read_collection(KEY_PRODUCTS).await
    }

    /// A single product by id.
    pub async fn get(&self, id: &str) -> Option<Product> {
        self.list().await.into_iter().find(|p| p.id == id)
    }

    /// Adds a product, assigning a fresh identifier.
    ///
    /// Whatever id the caller put on the product is replaced; returns the
    /// stored record.
    pub async fn add(&self, mut product: Product) -> StoreResult<Product> {
        product.id = generate_id(PRODUCT_ID_PREFIX);
        debug!(id = %product.id, name = %product.name, "Adding product");

        let mut products = self.list().await;
        products.push(product.clone());
        self.kv.write_collection(KEY_PRODUCTS, &products).await?;
        Ok(product)
    }

    /// Replaces a product by id. Unknown id is a no-op, matching the
    /// map-replace semantics of the collection write.
    pub async fn update(&self, updated: &Product) -> StoreResult<()> {
        debug!(id = %updated.id, "Updating product");

        let mut products = self.list().await;
        for product in products.iter_mut() {
            if product.id == updated.id {
                *product = updated.clone();
            }
        }
        self.kv.write_collection(KEY_PRODUCTS, &products).await
    }

    /// Hard-deletes a product.
    ///
    /// Historical sales keep their frozen snapshots; deleting the product
    /// never touches them. Later stock reconciliation involving this id
    /// silently skips it.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let mut products = self.list().await;
        products.retain(|p| p.id != id);
        self.kv.write_collection(KEY_PRODUCTS, &products).await
    }

    /// Sets a product's stock to an absolute level and logs the change.
    ///
    /// The signed difference and the resulting level are appended to the
    /// product's stock history together with the acting user and reason.
    /// An unknown id is logged and skipped.
    pub async fn adjust_stock(
        &self,
        id: &str,
        new_stock: i64,
        user: &str,
        reason: &str,
    ) -> StoreResult<()> {
        let mut products = self.list().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            warn!(id = %id, "Stock adjustment for unknown product, skipping");
            return Ok(());
        };

        let change = new_stock - product.stock;
        debug!(id = %id, change = change, new_stock = new_stock, "Adjusting stock");

        product.stock_history.push(StockAdjustment {
            date: Utc::now(),
            user: user.to_string(),
            reason: reason.to_string(),
            change,
            new_stock,
        });
        product.stock = new_stock;

        self.kv.write_collection(KEY_PRODUCTS, &products).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use lumina_core::Money;

    async fn empty_store() -> Store {
        Store::open(StoreConfig::in_memory().seed_on_open(false))
            .await
            .unwrap()
    }

    fn product(name: &str, stock: i64) -> Product {
        Product {
            id: String::new(),
            name: name.to_string(),
            price: Money::from_cents(1000),
            cost: Some(Money::from_cents(600)),
            stock,
            category: "Test".to_string(),
            image: None,
            barcode: None,
            stock_history: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_persists() {
        let store = empty_store().await;
        let repo = store.products();

        let stored = repo.add(product("Mug", 10)).await.unwrap();
        assert!(stored.id.starts_with("prod-"));

        let listed = repo.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Mug");
    }

    #[tokio::test]
    async fn test_update_replaces_by_id() {
        let store = empty_store().await;
        let repo = store.products();

        let mut stored = repo.add(product("Mug", 10)).await.unwrap();
        stored.price = Money::from_cents(1250);
        repo.update(&stored).await.unwrap();

        assert_eq!(repo.get(&stored.id).await.unwrap().price.cents(), 1250);
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let store = empty_store().await;
        let repo = store.products();

        let stored = repo.add(product("Mug", 10)).await.unwrap();
        repo.delete(&stored.id).await.unwrap();

        assert!(repo.get(&stored.id).await.is_none());
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_adjust_stock_logs_history() {
        let store = empty_store().await;
        let repo = store.products();

        let stored = repo.add(product("Mug", 10)).await.unwrap();
        repo.adjust_stock(&stored.id, 7, "admin", "stocktake")
            .await
            .unwrap();

        let after = repo.get(&stored.id).await.unwrap();
        assert_eq!(after.stock, 7);
        assert_eq!(after.stock_history.len(), 1);
        let entry = &after.stock_history[0];
        assert_eq!(entry.change, -3);
        assert_eq!(entry.new_stock, 7);
        assert_eq!(entry.user, "admin");
        assert_eq!(entry.reason, "stocktake");
    }

    #[tokio::test]
    async fn test_adjust_stock_unknown_product_is_noop() {
        let store = empty_store().await;
        let repo = store.products();
        repo.adjust_stock("prod-missing", 5, "admin", "stocktake")
            .await
            .unwrap();
        assert!(repo.list().await.is_empty());
    }
}
