//! # Store Migrations
//!
//! Embedded SQL migrations for the key-value medium. There is exactly one
//! table; migrations exist so the schema can evolve without hand-run SQL.
//!
//! ## Adding New Migrations
//! 1. Create a new file in `migrations/sqlite/` with the next number
//! 2. Name format: `NNN_description.sql`
//! 3. Write idempotent SQL (`IF NOT EXISTS` where possible)
//! 4. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending migrations. Idempotent and ordered.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    info!("Checking for pending migrations");
    MIGRATOR.run(pool).await?;
    info!("All migrations applied");
    Ok(())
}
