//! # Seed Data Tool
//!
//! Creates (or opens) a store file and seeds the demonstration catalog
//! and accounts into any absent keys.
//!
//! ## Usage
//! ```bash
//! # Seed the default file
//! cargo run -p lumina-store --bin seed
//!
//! # Specify the store path
//! cargo run -p lumina-store --bin seed -- --db ./data/lumina.db
//! ```
//!
//! Seeding is idempotent: keys that already hold data are left alone, so
//! running this against a live store is safe.

use std::env;

use lumina_store::{Store, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./lumina_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Lumina POS Seed Data Tool");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Store file path (default: ./lumina_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Lumina POS Seed Data Tool");
    println!("============================");
    println!("Store: {}", db_path);
    println!();

    let store = Store::open(StoreConfig::new(&db_path)).await?;

    println!("✓ Store opened");
    println!("✓ Migrations applied");
    println!();

    let products = store.products().list().await;
    println!("Catalog ({} products):", products.len());
    for product in &products {
        println!(
            "  {:<16} {:>10}  stock {:>4}  [{}]",
            product.name,
            product.price.to_string(),
            product.stock,
            product.category
        );
    }

    let users = store.users().list().await;
    println!();
    println!("Accounts ({}):", users.len());
    for user in &users {
        println!("  {:<10} {:?}", user.username, user.role);
    }

    println!();
    println!("✓ Seed complete!");

    store.close().await;
    Ok(())
}
