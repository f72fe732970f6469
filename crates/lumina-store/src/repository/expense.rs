//! # Expense Repository
//!
//! Plain CRUD over the expenses collection. No derived invariants; the
//! reporting aggregator does the category bucketing.

use tracing::debug;

use lumina_core::ids::{generate_id, EXPENSE_ID_PREFIX};
use lumina_core::Expense;

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_EXPENSES};

/// Repository for recorded expenses.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    kv: KvStore,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository.
    pub fn new(kv: KvStore) -> Self {
        ExpenseRepository { kv }
    }

    /// All expenses, newest first.
    pub async fn list(&self) -> Vec<Expense> {
        self.kv.read_collection(KEY_EXPENSES).await
    }

    /// Records an expense, assigning a fresh identifier.
    pub async fn add(&self, mut expense: Expense) -> StoreResult<Expense> {
        expense.id = generate_id(EXPENSE_ID_PREFIX);
        debug!(id = %expense.id, amount = %expense.amount, "Adding expense");

        let mut expenses = self.list().await;
        expenses.insert(0, expense.clone());
        self.kv.write_collection(KEY_EXPENSES, &expenses).await?;
        Ok(expense)
    }

    /// Replaces an expense by id. Unknown id is a no-op.
    pub async fn update(&self, updated: &Expense) -> StoreResult<()> {
        debug!(id = %updated.id, "Updating expense");

        let mut expenses = self.list().await;
        for expense in expenses.iter_mut() {
            if expense.id == updated.id {
                *expense = updated.clone();
            }
        }
        self.kv.write_collection(KEY_EXPENSES, &expenses).await
    }

    /// Deletes an expense by id.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting expense");

        let mut expenses = self.list().await;
        expenses.retain(|e| e.id != id);
        self.kv.write_collection(KEY_EXPENSES, &expenses).await
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

    fn expense(category: &str, amount: i64) -> Expense {
        Expense {
            id: String::new(),
            category: category.to_string(),
            description: "test".to_string(),
            amount: Money::from_cents(amount),
            date: "2024-05-01".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.expenses();

        let stored = repo.add(expense("rent", 50_000)).await.unwrap();
        assert!(stored.id.starts_with("exp-"));

        let mut updated = stored.clone();
        updated.amount = Money::from_cents(55_000);
        repo.update(&updated).await.unwrap();

        let listed = repo.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount.cents(), 55_000);

        repo.delete(&stored.id).await.unwrap();
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_newest_first_ordering() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.expenses();

        repo.add(expense("rent", 100)).await.unwrap();
        let second = repo.add(expense("fuel", 200)).await.unwrap();

        assert_eq!(repo.list().await[0].id, second.id);
    }
}
