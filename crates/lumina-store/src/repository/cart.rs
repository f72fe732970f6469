//! # Cart Repository
//!
//! Persists the active cart across sessions. An absent or unreadable
//! stored cart loads as empty, so the register always starts usable.

use lumina_core::Cart;

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_CART};

/// Repository for the active cart.
#[derive(Debug, Clone)]
pub struct CartRepository {
    kv: KvStore,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(kv: KvStore) -> Self {
        CartRepository { kv }
    }

    /// Loads the persisted cart, empty if none is stored.
    pub async fn load(&self) -> Cart {
        self.kv.read_scalar(KEY_CART).await.unwrap_or_default()
    }

    /// Persists the cart as-is.
    pub async fn save(&self, cart: &Cart) -> StoreResult<()> {
        self.kv.write_scalar(KEY_CART, cart).await
    }

    /// Persists an empty cart, typically after checkout.
    pub async fn clear(&self) -> StoreResult<()> {
        self.save(&Cart::default()).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use lumina_core::CartItem;

    #[tokio::test]
    async fn test_load_save_clear() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.cart();

        assert!(repo.load().await.is_empty());

        let products = store.products().list().await;
        let mut cart = Cart::default();
        cart.add_product(&products[0]).unwrap();
        repo.save(&cart).await.unwrap();

        let loaded = repo.load().await;
        assert_eq!(loaded.line_count(), 1);
        assert_eq!(
            loaded.items()[0],
            CartItem::from_product(&products[0], 1)
        );

        repo.clear().await.unwrap();
        assert!(repo.load().await.is_empty());
    }
}
