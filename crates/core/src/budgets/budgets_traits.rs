//! Budget repository and service traits.

use async_trait::async_trait;

use super::budgets_model::{Budget, BudgetProgress, NewBudget};
use crate::errors::Result;

/// Trait defining the contract for Budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_by_id(&self, budget_id: &str) -> Result<Budget>;

    fn list(&self) -> Result<Vec<Budget>>;

    fn list_by_account(&self, account_id: &str) -> Result<Vec<Budget>>;

    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;

    async fn update(&self, budget: Budget) -> Result<Budget>;

    async fn delete(&self, budget_id: &str) -> Result<usize>;

    /// Deletes every budget scoped to an account (cascade path).
    async fn delete_for_account(&self, account_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, account_id: &str) -> Result<Vec<Budget>>;

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    async fn update_budget(&self, budget: Budget) -> Result<Budget>;

    async fn delete_budget(&self, budget_id: &str) -> Result<usize>;

    /// Computes the current progress of one budget against the account's
    /// expense snapshot. On-demand; never scheduled internally.
    fn get_progress(&self, budget_id: &str) -> Result<BudgetProgress>;

    /// Computes progress for every budget scoped to an account.
    fn get_progress_for_account(&self, account_id: &str) -> Result<Vec<BudgetProgress>>;
}
