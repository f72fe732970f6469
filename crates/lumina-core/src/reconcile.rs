//! # Sale Reconciliation Math
//!
//! The pure half of the reconciliation engine: given sale line items,
//! compute the signed stock deltas the store must apply. The persistence
//! half lives in `lumina-store`.
//!
//! ## Amendment Delta Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  original sale:  A ×5   B ×2                                        │
//! │  edited sale:    A ×2        C ×1                                   │
//! │                                                                     │
//! │  per-product map (original positive, edited subtracted):            │
//! │     A: +5 - 2 = +3   → 3 units return to stock                      │
//! │     B: +2 - 0 = +2   → 2 units return to stock                      │
//! │     C:  0 - 1 = -1   → 1 more unit leaves stock                     │
//! │                                                                     │
//! │  zero deltas are dropped; products deleted from the catalog since   │
//! │  the sale are skipped by the applier with no error                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No bound is validated here. Over-return (editing a quantity above the
//! original) is the caller's job to prevent; the math is happy to produce
//! any signed delta it is asked for.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::{CartItem, PaymentMethod, Sale};

/// A signed per-product stock adjustment.
///
/// Positive means units go back to stock, negative means units leave it,
/// matching the "add the delta to stock" application rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockDelta {
    pub product_id: String,
    pub delta: i64,
}

/// Builds a sale record from checkout inputs.
///
/// Computes `total = Σ price × qty` and `final_total = total - discount`
/// over the snapshot items, establishing the totals invariant at creation.
/// The id and date are supplied by the caller so the function stays
/// deterministic.
pub fn build_sale(
    items: Vec<CartItem>,
    discount: Money,
    payment_method: PaymentMethod,
    user: &str,
    id: String,
    date: DateTime<Utc>,
) -> Sale {
    let total: Money = items.iter().map(CartItem::line_total).sum();
    Sale {
        id,
        total,
        discount,
        final_total: total - discount,
        items,
        payment_method,
        date,
        user: user.to_string(),
        modification_history: Vec::new(),
    }
}

/// Stock deltas for creating a sale: every sold unit leaves stock.
pub fn sale_deltas(items: &[CartItem]) -> Vec<StockDelta> {
    items
        .iter()
        .map(|item| StockDelta {
            product_id: item.product_id.clone(),
            delta: -item.quantity,
        })
        .collect()
}

/// Net stock deltas between a sale's original and edited line items.
///
/// Original quantities count positive, edited quantities subtract. A
/// product present in the original but absent from the edit contributes
/// its full original quantity as a return. Zero net deltas are dropped.
///
/// Result order is first-encounter order across the two item lists, which
/// keeps delta application deterministic.
pub fn amendment_deltas(original: &[CartItem], edited: &[CartItem]) -> Vec<StockDelta> {
    let mut order: Vec<String> = Vec::new();
    let mut net: HashMap<String, i64> = HashMap::new();

    for item in original {
        if !net.contains_key(&item.product_id) {
            order.push(item.product_id.clone());
        }
        *net.entry(item.product_id.clone()).or_insert(0) += item.quantity;
    }
    for item in edited {
        if !net.contains_key(&item.product_id) {
            order.push(item.product_id.clone());
        }
        *net.entry(item.product_id.clone()).or_insert(0) -= item.quantity;
    }

    order
        .into_iter()
        .filter_map(|product_id| {
            let delta = net[&product_id];
            (delta != 0).then_some(StockDelta { product_id, delta })
        })
        .collect()
}

/// Applies signed deltas to the product collection in place.
///
/// Each delta is *added* to the matching product's stock. Products that
/// no longer exist in the catalog are skipped with no error (deleted
/// since the sale). No floor is enforced; stock may go negative.
///
/// Returns whether any product changed, so callers can skip the
/// collection write when nothing did.
pub fn apply_deltas(products: &mut [crate::types::Product], deltas: &[StockDelta]) -> bool {
    let mut changed = false;
    for delta in deltas {
        if let Some(product) = products.iter_mut().find(|p| p.id == delta.product_id) {
            product.stock += delta.delta;
            changed = true;
        }
    }
    changed
}

/// Human-readable change description for the amendment log.
///
/// One fragment per changed line, joined with `", "`:
/// `"Coffee Mug: Qty 5 -> 2, Notebook: Qty 2 -> 0"`.
/// Returns an empty string when nothing changed.
pub fn describe_changes(original: &[CartItem], edited: &[CartItem]) -> String {
    let mut changes: Vec<String> = Vec::new();

    for up in edited {
        let before = original
            .iter()
            .find(|o| o.product_id == up.product_id)
            .map(|o| o.quantity)
            .unwrap_or(0);
        if before != up.quantity {
            changes.push(format!("{}: Qty {} -> {}", up.name, before, up.quantity));
        }
    }

    // Lines removed entirely from the edited sale
    for orig in original {
        if !edited.iter().any(|u| u.product_id == orig.product_id) {
            changes.push(format!("{}: Qty {} -> 0", orig.name, orig.quantity));
        }
    }

    changes.join(", ")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price: i64, quantity: i64) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            name: format!("Item {}", product_id),
            price: Money::from_cents(price),
            cost: None,
            quantity,
        }
    }

    #[test]
    fn test_build_sale_totals_invariant() {
        // [(A, qty=2, price=10.00), (B, qty=1, price=5.00)], discount 3.00
        let items = vec![item("prod-a", 1000, 2), item("prod-b", 500, 1)];
        let sale = build_sale(
            items,
            Money::from_cents(300),
            PaymentMethod::Cash,
            "cashier",
            "sale-1".to_string(),
            Utc::now(),
        );

        assert_eq!(sale.total.cents(), 2500);
        assert_eq!(sale.final_total.cents(), 2200);
        assert_eq!(sale.final_total, sale.total - sale.discount);
    }

    #[test]
    fn test_sale_deltas_are_negative_quantities() {
        let items = vec![item("prod-a", 1000, 2), item("prod-b", 500, 1)];
        let deltas = sale_deltas(&items);

        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].delta, -2);
        assert_eq!(deltas[1].delta, -1);
    }

    #[test]
    fn test_amendment_reduction_returns_stock() {
        let original = vec![item("prod-a", 1000, 5)];
        let edited = vec![item("prod-a", 1000, 2)];

        let deltas = amendment_deltas(&original, &edited);
        assert_eq!(
            deltas,
            vec![StockDelta {
                product_id: "prod-a".to_string(),
                delta: 3
            }]
        );
    }

    #[test]
    fn test_amendment_increase_takes_stock() {
        let original = vec![item("prod-a", 1000, 2)];
        let edited = vec![item("prod-a", 1000, 5)];

        let deltas = amendment_deltas(&original, &edited);
        assert_eq!(deltas[0].delta, -3);
    }

    #[test]
    fn test_amendment_removed_line_is_full_return() {
        let original = vec![item("prod-a", 1000, 2), item("prod-b", 500, 4)];
        let edited = vec![item("prod-a", 1000, 2)];

        let deltas = amendment_deltas(&original, &edited);
        // prod-a nets to zero and is dropped
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].product_id, "prod-b");
        assert_eq!(deltas[0].delta, 4);
    }

    #[test]
    fn test_amendment_no_change_is_empty() {
        let original = vec![item("prod-a", 1000, 2)];
        let deltas = amendment_deltas(&original, &original.clone());
        assert!(deltas.is_empty());
    }

    #[test]
    fn test_apply_deltas_skips_missing_products() {
        use crate::types::Product;

        let mut products = vec![Product {
            id: "prod-a".to_string(),
            name: "A".to_string(),
            price: Money::from_cents(100),
            cost: None,
            stock: 10,
            category: "c".to_string(),
            image: None,
            barcode: None,
            stock_history: Vec::new(),
        }];

        let deltas = vec![
            StockDelta {
                product_id: "prod-a".to_string(),
                delta: -4,
            },
            StockDelta {
                product_id: "prod-gone".to_string(),
                delta: 2,
            },
        ];

        assert!(apply_deltas(&mut products, &deltas));
        assert_eq!(products[0].stock, 6);
    }

    #[test]
    fn test_apply_deltas_reports_no_change() {
        let mut products: Vec<crate::types::Product> = Vec::new();
        let deltas = vec![StockDelta {
            product_id: "prod-gone".to_string(),
            delta: 1,
        }];
        assert!(!apply_deltas(&mut products, &deltas));
    }

    #[test]
    fn test_describe_changes() {
        let original = vec![item("prod-a", 1000, 5), item("prod-b", 500, 2)];
        let edited = vec![item("prod-a", 1000, 2)];

        let text = describe_changes(&original, &edited);
        assert_eq!(text, "Item prod-a: Qty 5 -> 2, Item prod-b: Qty 2 -> 0");
    }

    #[test]
    fn test_describe_changes_empty_when_unchanged() {
        let original = vec![item("prod-a", 1000, 5)];
        assert_eq!(describe_changes(&original, &original.clone()), "");
    }
}
