//! Transaction repository trait.
//!
//! Besides plain CRUD, the repository exposes watch subscriptions: the store
//! pushes the full current collection state on every change, never deltas.

use async_trait::async_trait;
use tokio::sync::watch;

use super::transactions_model::{ExpenseRecord, IncomeRecord, NewExpense, NewIncome};
use crate::errors::Result;

/// A watch subscription on one account's collection.
///
/// Every notification carries the complete latest snapshot; intermediate
/// states may be skipped (last-write-wins).
pub type CollectionWatch<T> = watch::Receiver<Vec<T>>;

/// Trait defining the contract for income/expense record operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists all income records belonging to an account.
    fn get_incomes(&self, account_id: &str) -> Result<Vec<IncomeRecord>>;

    /// Lists all expense records belonging to an account.
    fn get_expenses(&self, account_id: &str) -> Result<Vec<ExpenseRecord>>;

    async fn create_income(&self, new_income: NewIncome) -> Result<IncomeRecord>;

    async fn update_income(&self, income: IncomeRecord) -> Result<IncomeRecord>;

    async fn delete_income(&self, income_id: &str) -> Result<usize>;

    async fn create_expense(&self, new_expense: NewExpense) -> Result<ExpenseRecord>;

    async fn update_expense(&self, expense: ExpenseRecord) -> Result<ExpenseRecord>;

    async fn delete_expense(&self, expense_id: &str) -> Result<usize>;

    /// Deletes every record belonging to an account (cascade path).
    async fn delete_for_account(&self, account_id: &str) -> Result<usize>;

    /// Opens a watch subscription on the account's income collection.
    ///
    /// Dropping the receiver is the unsubscribe; no dangling callbacks.
    fn watch_incomes(&self, account_id: &str) -> Result<CollectionWatch<IncomeRecord>>;

    /// Opens a watch subscription on the account's expense collection.
    fn watch_expenses(&self, account_id: &str) -> Result<CollectionWatch<ExpenseRecord>>;
}
