//! # Domain Types
//!
//! Core domain types used throughout Lumina POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐        │
//! │  │   Product     │   │     Sale      │   │   Expense     │        │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │        │
//! │  │  id (string)  │   │  id (string)  │   │  id (string)  │        │
//! │  │  price        │   │  items (snap) │   │  category     │        │
//! │  │  stock        │   │  final_total  │   │  amount       │        │
//! │  │  history      │   │  history      │   │  date         │        │
//! │  └───────────────┘   └───────────────┘   └───────────────┘        │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐        │
//! │  │  CartItem     │   │ PaymentMethod │   │  StoredUser   │        │
//! │  │  (snapshot)   │   │  Cash         │   │  username     │        │
//! │  │  + quantity   │   │  Card         │   │  password     │        │
//! │  │               │   │  Multiple     │   │  role         │        │
//! │  └───────────────┘   └───────────────┘   └───────────────┘        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartItem` is a frozen copy of the product fields taken when the item
//! enters the cart, plus a quantity. Sales own these copies outright, so
//! later price/cost edits (or deleting the product entirely) never touch
//! historical records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Stock is the seed value plus the signed sum of every applied delta.
/// The entity itself does not know it is derived; consistency relies on
/// callers routing all stock mutations through the repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (`prod-{millis}-{suffix}`).
    pub id: String,

    /// Display name shown to the cashier and on receipts.
    pub name: String,

    /// Sell price.
    pub price: Money,

    /// Unit cost, used for profit calculations.
    ///
    /// Absent cost is treated as zero, which makes profit over-report for
    /// products without a recorded cost. Documented behavior, not a bug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Money>,

    /// Current stock level. May go negative on oversell; no floor is
    /// enforced (single-terminal assumption).
    pub stock: i64,

    /// Free-text category.
    pub category: String,

    /// Optional image reference (URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Optional barcode (EAN-13, UPC-A, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Append-only log of manual stock adjustments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stock_history: Vec<StockAdjustment>,
}

impl Product {
    /// Cost for profit purposes: recorded cost or zero.
    #[inline]
    pub fn cost_or_zero(&self) -> Money {
        self.cost.unwrap_or_default()
    }
}

/// One entry in a product's stock adjustment log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    /// When the adjustment was made.
    pub date: DateTime<Utc>,
    /// Username of the acting operator.
    pub user: String,
    /// Why (stocktake, damage, correction, ...).
    pub reason: String,
    /// Signed change applied to stock.
    pub change: i64,
    /// Stock level after the change.
    pub new_stock: i64,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product snapshot plus quantity.
///
/// Exists transiently in the active cart and is frozen into a [`Sale`] at
/// checkout. Uses the snapshot pattern: price and cost are copied, not
/// referenced, so the sale history survives product edits and deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this snapshot was taken from.
    pub product_id: String,
    /// Name at time of adding (frozen).
    pub name: String,
    /// Price at time of adding (frozen).
    pub price: Money,
    /// Cost at time of adding (frozen).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Money>,
    /// Quantity in cart / sold.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a snapshot of a product with the given quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            cost: product.cost,
            quantity,
        }
    }

    /// Line total (`price × quantity`).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Line cost (`cost_or_zero × quantity`), for profit math.
    #[inline]
    pub fn line_cost(&self) -> Money {
        self.cost.unwrap_or_default().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// Split tender across more than one method.
    Multiple,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale.
///
/// ## Invariants (at time of last save)
/// - `final_total == total - discount`
/// - `total == Σ item.price × item.quantity`
///
/// Sales are created at checkout and mutated only through the amendment
/// procedure; the application never physically deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier (`sale-{millis}-{suffix}`).
    pub id: String,
    /// Item snapshots at time of sale.
    pub items: Vec<CartItem>,
    /// Pre-discount total.
    pub total: Money,
    /// Absolute discount amount (not validated against total).
    pub discount: Money,
    /// Post-discount total actually charged.
    pub final_total: Money,
    /// Tender used.
    pub payment_method: PaymentMethod,
    /// When the sale completed.
    pub date: DateTime<Utc>,
    /// Username of the acting cashier.
    pub user: String,
    /// Append-only amendment log.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_history: Vec<SaleAmendment>,
}

impl Sale {
    /// Total quantity across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// One entry in a sale's amendment log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleAmendment {
    /// When the amendment was made.
    pub date: DateTime<Utc>,
    /// Username of the acting operator.
    pub user: String,
    /// Why (customer return, entry error, ...).
    pub reason: String,
    /// Human-readable description, e.g. `"Coffee Mug: Qty 5 -> 2"`.
    pub changes: String,
}

// =============================================================================
// Expense
// =============================================================================

/// A recorded business expense. Plain CRUD entity, no derived invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier (`exp-{millis}-{suffix}`).
    pub id: String,
    /// Free-text category (the UI offers a closed set plus "other").
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Amount spent.
    pub amount: Money,
    /// Calendar date of the expense.
    pub date: NaiveDate,
}

// =============================================================================
// Users
// =============================================================================

/// Operator role. Admins manage catalog, finances and settings; cashiers
/// run the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
}

/// A user as exposed to the rest of the application (no password).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub role: Role,
}

/// A user as persisted, including the plaintext password.
///
/// Equality-check authentication only. This is an offline single-store
/// demo credential store, not a hardened one; hashing is an explicit
/// non-goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl StoredUser {
    /// Strips the password for handing out to callers.
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Application settings.
///
/// ## Forward Compatibility
/// Unknown keys persisted by a previous (or future) version are captured in
/// `extra` via `#[serde(flatten)]` and written back untouched, so loading
/// and saving settings never drops fields the current build doesn't know.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency symbol prepended to displayed amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Products with `stock <= threshold` count as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,

    /// Whether the UI plays sound cues.
    #[serde(default = "default_sound_effects")]
    pub sound_effects_enabled: bool,

    /// Keys from other versions, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_currency() -> String {
    "LYD ".to_string()
}

const fn default_low_stock_threshold() -> i64 {
    10
}

const fn default_sound_effects() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: default_currency(),
            low_stock_threshold: default_low_stock_threshold(),
            sound_effects_enabled: default_sound_effects(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Sound Cues
// =============================================================================

/// Event names for the UI sound-cue collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundCue {
    ItemAdded,
    SaleCompleted,
    CartCleared,
    Error,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64, cost: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            name: "Coffee Mug".to_string(),
            price: Money::from_cents(price),
            cost: cost.map(Money::from_cents),
            stock: 10,
            category: "Kitchenware".to_string(),
            image: None,
            barcode: None,
            stock_history: Vec::new(),
        }
    }

    #[test]
    fn test_cart_item_snapshot_is_frozen() {
        let mut p = product("prod-1", 1500, Some(700));
        let item = CartItem::from_product(&p, 2);

        // Edit the product after snapshotting
        p.price = Money::from_cents(9999);
        p.cost = None;

        assert_eq!(item.price.cents(), 1500);
        assert_eq!(item.cost.unwrap().cents(), 700);
        assert_eq!(item.line_total().cents(), 3000);
        assert_eq!(item.line_cost().cents(), 1400);
    }

    #[test]
    fn test_line_cost_defaults_to_zero() {
        let p = product("prod-1", 1500, None);
        let item = CartItem::from_product(&p, 3);
        assert_eq!(item.line_cost().cents(), 0);
    }

    #[test]
    fn test_payment_method_serde_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Multiple).unwrap(),
            "\"multiple\""
        );
        let m: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(m, PaymentMethod::Cash);
    }

    #[test]
    fn test_settings_defaults() {
        let s = Settings::default();
        assert_eq!(s.currency, "LYD ");
        assert_eq!(s.low_stock_threshold, 10);
        assert!(s.sound_effects_enabled);
        assert!(s.extra.is_empty());
    }

    #[test]
    fn test_settings_preserves_unknown_keys() {
        let json = r#"{"currency":"EUR ","receiptFooter":"thanks!"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(s.currency, "EUR ");
        // Missing known keys fall back to defaults
        assert_eq!(s.low_stock_threshold, 10);
        // Unknown keys survive a round trip
        let back = serde_json::to_value(&s).unwrap();
        assert_eq!(back["receiptFooter"], "thanks!");
    }

    #[test]
    fn test_stored_user_strips_password() {
        let stored = StoredUser {
            id: 1,
            username: "admin".to_string(),
            password: "password".to_string(),
            role: Role::Admin,
        };
        let user = stored.to_user();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, Role::Admin);
        assert!(serde_json::to_string(&user).unwrap().find("password").is_none());
    }
}
