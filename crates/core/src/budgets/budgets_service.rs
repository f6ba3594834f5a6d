use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::budgets_calculator::calculate_progress;
use super::budgets_model::{Budget, BudgetProgress, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::transactions::TransactionRepositoryTrait;

/// Service for managing budgets and computing their progress.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BudgetService {
    /// Creates a new BudgetService instance.
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
        }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self, account_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_by_account(account_id)
    }

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        debug!(
            "Creating {:?} budget for category '{}' on account {}",
            new_budget.period, new_budget.category, new_budget.account_id
        );
        self.repository.create(new_budget).await
    }

    async fn update_budget(&self, budget: Budget) -> Result<Budget> {
        self.repository.update(budget).await
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        self.repository.delete(budget_id).await
    }

    fn get_progress(&self, budget_id: &str) -> Result<BudgetProgress> {
        let budget = self.repository.get_by_id(budget_id)?;
        let expenses = self.transaction_repository.get_expenses(&budget.account_id)?;
        Ok(calculate_progress(&budget, &expenses, Utc::now().date_naive()))
    }

    fn get_progress_for_account(&self, account_id: &str) -> Result<Vec<BudgetProgress>> {
        let budgets = self.repository.list_by_account(account_id)?;
        let expenses = self.transaction_repository.get_expenses(account_id)?;
        let today = Utc::now().date_naive();
        Ok(budgets
            .iter()
            .map(|budget| calculate_progress(budget, &expenses, today))
            .collect())
    }
}
