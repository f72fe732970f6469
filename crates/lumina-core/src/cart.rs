//! # Cart
//!
//! The active shopping cart: pure, in-memory, persisted as a scalar value
//! by the store so an accidental reload does not lose the register state.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  UI Action              Cart Operation         Effect               │
//! │  ─────────              ──────────────         ──────               │
//! │  Click product ───────► add_product()    ───►  qty + 1 (bounded)    │
//! │  Change quantity ─────► update_quantity() ──►  qty = n (clamped)    │
//! │  Click remove ────────► remove_item()    ───►  item dropped         │
//! │  Click clear ─────────► clear()          ───►  items.clear()        │
//! │  Checkout ────────────► items handed to the reconciliation engine   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock bounds here use the stock the caller hands in: `add_product`
//! reads it off the passed product, `update_quantity` takes it as a
//! parameter (the item snapshot carries no stock field). Either way it is
//! the catalog value at call time, a courtesy to the cashier rather than
//! a guarantee: the engine itself never enforces a floor and oversell
//! remains reachable with a stale cart.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItem, Product};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (re-adding increases quantity)
/// - Every quantity is >= 1 (dropping to 0 removes the item)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Restores a cart from persisted items.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Items in the cart, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consumes the cart, yielding the items for checkout.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Adds one unit of a product, or bumps the quantity if present.
    ///
    /// Rejects the add once the in-cart quantity reaches the passed
    /// product's current stock; the register plays the error cue for that.
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        let current = self
            .items
            .iter()
            .find(|i| i.product_id == product.id)
            .map(|i| i.quantity)
            .unwrap_or(0);

        if product.stock <= current {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
                available: product.stock,
                requested: current + 1,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::from_product(product, 1));
        }
        Ok(())
    }

    /// Sets the quantity of an item.
    ///
    /// ## Behavior
    /// - quantity <= 0 removes the item
    /// - quantity above `stock` (the caller-supplied current catalog
    ///   stock) is clamped to it and reported via `OutOfStock` so the UI
    ///   can play the error cue
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64, stock: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| CoreError::NotInCart(product_id.to_string()))?;

        if quantity > stock {
            item.quantity = stock;
            return Err(CoreError::OutOfStock {
                name: item.name.clone(),
                available: stock,
                requested: quantity,
            });
        }

        item.quantity = quantity;
        Ok(())
    }

    /// Removes an item by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == before {
            Err(CoreError::NotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Pre-discount total across all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total after an absolute discount. The discount is not validated
    /// against the subtotal; a discount larger than the subtotal yields a
    /// negative total, which the UI is expected to prevent.
    pub fn total_after_discount(&self, discount: Money) -> Money {
        self.subtotal() - discount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(price),
            cost: None,
            stock,
            category: "Test".to_string(),
            image: None,
            barcode: None,
            stock_history: Vec::new(),
        }
    }

    #[test]
    fn test_add_product_bumps_quantity() {
        let p = product("prod-1", 1000, 5);
        let mut cart = Cart::new();

        cart.add_product(&p).unwrap();
        cart.add_product(&p).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_add_product_bounded_by_stock() {
        let p = product("prod-1", 1000, 2);
        let mut cart = Cart::new();

        cart.add_product(&p).unwrap();
        cart.add_product(&p).unwrap();
        let err = cart.add_product(&p).unwrap_err();

        assert!(matches!(err, CoreError::OutOfStock { available: 2, .. }));
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let p = product("prod-1", 1000, 5);
        let mut cart = Cart::new();
        cart.add_product(&p).unwrap();

        cart.update_quantity("prod-1", 0, 5).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_to_stock() {
        let p = product("prod-1", 1000, 3);
        let mut cart = Cart::new();
        cart.add_product(&p).unwrap();

        let err = cart.update_quantity("prod-1", 10, 3).unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { .. }));
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_totals() {
        let a = product("prod-a", 1000, 10);
        let b = product("prod-b", 500, 10);
        let mut cart = Cart::new();
        cart.add_product(&a).unwrap();
        cart.add_product(&a).unwrap();
        cart.add_product(&b).unwrap();

        assert_eq!(cart.subtotal().cents(), 2500);
        assert_eq!(
            cart.total_after_discount(Money::from_cents(300)).cents(),
            2200
        );
    }

    #[test]
    fn test_remove_missing_item() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.remove_item("prod-x"),
            Err(CoreError::NotInCart(_))
        ));
    }
}
