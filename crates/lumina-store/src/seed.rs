//! # First-Run Seeding
//!
//! On the first ever open (no existing keys) the store seeds a fixed
//! demonstration catalog and two accounts, so the register is usable out
//! of the box. Sales and expenses seed to empty collections.
//!
//! Each key is seeded independently and only when absent, so a partial
//! earlier run never gets clobbered.

use lumina_core::ids::{generate_id, PRODUCT_ID_PREFIX};
use lumina_core::{CartItem, Expense, Money, Product, Role, Sale, StoredUser};
use tracing::info;

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_CART, KEY_EXPENSES, KEY_PRODUCTS, KEY_SALES, KEY_USERS};

/// Demonstration catalog: (name, price, cost, stock, category, barcode, image seed).
/// Prices and costs in whole currency units.
const DEMO_CATALOG: &[(&str, i64, i64, i64, &str, &str, &str)] = &[
    ("Laptop Pro", 1200, 800, 50, "Electronics", "1234567890123", "laptop"),
    ("Wireless Mouse", 25, 15, 200, "Accessories", "2345678901234", "mouse"),
    ("Coffee Mug", 15, 7, 150, "Kitchenware", "3456789012345", "mug"),
    ("Notebook", 5, 2, 500, "Stationery", "4567890123456", "notebook"),
    ("T-Shirt", 20, 12, 100, "Apparel", "5678901234567", "shirt"),
    ("Water Bottle", 10, 4, 300, "Accessories", "6789012345678", "bottle"),
    ("Backpack", 50, 30, 80, "Bags", "7890123456789", "backpack"),
    ("Headphones", 150, 90, 60, "Electronics", "8901234567890", "headphones"),
];

/// Builds the demo product catalog with fresh identifiers.
pub fn demo_products() -> Vec<Product> {
    DEMO_CATALOG
        .iter()
        .map(|(name, price, cost, stock, category, barcode, seed)| Product {
            id: generate_id(PRODUCT_ID_PREFIX),
            name: name.to_string(),
            price: Money::from_major_minor(*price, 0),
            cost: Some(Money::from_major_minor(*cost, 0)),
            stock: *stock,
            category: category.to_string(),
            image: Some(format!("https://picsum.photos/seed/{}/200", seed)),
            barcode: Some(barcode.to_string()),
            stock_history: Vec::new(),
        })
        .collect()
}

/// The two demonstration accounts.
///
/// Plaintext passwords: this is an offline demo credential store;
/// hashing is an explicit non-goal.
pub fn demo_users() -> Vec<StoredUser> {
    vec![
        StoredUser {
            id: 1,
            username: "admin".to_string(),
            password: "password".to_string(),
            role: Role::Admin,
        },
        StoredUser {
            id: 2,
            username: "cashier".to_string(),
            password: "password".to_string(),
            role: Role::Cashier,
        },
    ]
}

/// Seeds every absent key. Called once per open, after migrations.
pub async fn initialize(kv: &KvStore) -> StoreResult<()> {
    if !kv.contains_key(KEY_PRODUCTS).await? {
        info!("First run: seeding demo catalog");
        kv.write_collection(KEY_PRODUCTS, &demo_products()).await?;
    }
    if !kv.contains_key(KEY_USERS).await? {
        info!("First run: seeding demo accounts");
        kv.write_collection(KEY_USERS, &demo_users()).await?;
    }
    if !kv.contains_key(KEY_SALES).await? {
        kv.write_collection::<Sale>(KEY_SALES, &[]).await?;
    }
    if !kv.contains_key(KEY_EXPENSES).await? {
        kv.write_collection::<Expense>(KEY_EXPENSES, &[]).await?;
    }
    if !kv.contains_key(KEY_CART).await? {
        kv.write_collection::<CartItem>(KEY_CART, &[]).await?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
